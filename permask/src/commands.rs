use crate::cli;
use crate::render::describe;
use crate::shell::{resolve_flag, resolve_position, Shell};
use owo_colors::OwoColorize;
use permask_flags::{is_power_of_two, Flag, FlagSet};
use std::process::ExitCode;

fn fail(message: impl std::fmt::Display) -> ExitCode {
    eprintln!("{}: {message}", "error".bright_red());
    ExitCode::FAILURE
}

pub fn show(flags: cli::ShowFlags) -> ExitCode {
    let table = flags.table.table.resolve();
    println!("{}", describe(table, FlagSet::new(flags.bits)));
    ExitCode::SUCCESS
}

pub fn grant(flags: cli::EditFlags) -> ExitCode {
    edit(flags, FlagSet::grant)
}

pub fn revoke(flags: cli::EditFlags) -> ExitCode {
    edit(flags, FlagSet::revoke)
}

fn edit(flags: cli::EditFlags, op: fn(FlagSet, FlagSet) -> FlagSet) -> ExitCode {
    let table = flags.table.table.resolve();

    // All-or-nothing: a typo in any name means no edit at all.
    let mask = flags
        .flags
        .iter()
        .map(|name| resolve_flag(table, name).map(Flag::mask))
        .try_fold(FlagSet::EMPTY, |mask, flag| flag.map(|f| mask.grant(f)));

    match mask {
        Ok(mask) => {
            println!("{}", describe(table, op(FlagSet::new(flags.bits), mask)));
            ExitCode::SUCCESS
        }
        Err(message) => fail(message),
    }
}

pub fn check(flags: cli::CheckFlags) -> ExitCode {
    let table = flags.table.table.resolve();

    match resolve_flag(table, &flags.flag) {
        Ok(flag) => {
            let held = FlagSet::new(flags.bits).has(flag.mask());
            println!("{flag}: {}", if held { "on" } else { "off" });
            ExitCode::SUCCESS
        }
        Err(message) => fail(message),
    }
}

pub fn toggle(flags: cli::ToggleFlags) -> ExitCode {
    let table = flags.table.table.resolve();

    let toggled = resolve_position(table, &flags.flag)
        .and_then(|position| {
            FlagSet::new(flags.bits)
                .toggle(position)
                .map_err(|err| err.to_string())
        });

    match toggled {
        Ok(set) => {
            println!("{}", describe(table, set));
            ExitCode::SUCCESS
        }
        Err(message) => fail(message),
    }
}

pub fn pow2(flags: cli::Pow2Flags) -> ExitCode {
    let n = flags.number;
    if is_power_of_two(n) {
        println!("{n} is a power of two");
    } else {
        println!("{n} is not a power of two");
    }
    ExitCode::SUCCESS
}

pub fn shell(flags: cli::ShellFlags) -> ExitCode {
    let table = flags.table.table.resolve();
    let mut shell = Shell::new(table, FlagSet::new(flags.bits.unwrap_or(0)));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match shell.run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(err),
    }
}
