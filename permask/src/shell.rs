use crate::render::describe;
use permask_flags::{is_power_of_two, Flag, FlagSet, FlagTable};
use std::io::{self, BufRead, Write};
use tracing::trace;

const HELP: &str = "\
commands:
  show                 print the current word
  set <bits>           replace the word
  grant <flag>...      set named flags
  revoke <flag>...     clear named flags
  check <flag>         report whether a flag is set
  toggle <flag|pos>    flip one bit (0-based position)
  pow2 <number>        power-of-two test
  table                print the active flag table
  help                 this text
  quit                 leave the shell";

/// The interactive surface around one flag word.
///
/// Lines of text come in, replies come out; the word only changes when
/// an operation succeeds, so a failed line leaves the state exactly as
/// it was. Reader and writer are injected so tests can drive the loop
/// with a scripted transcript.
pub struct Shell {
    table: &'static FlagTable,
    state: FlagSet,
}

impl Shell {
    pub fn new(table: &'static FlagTable, initial: FlagSet) -> Shell {
        Shell { table, state: initial }
    }

    pub fn state(&self) -> FlagSet {
        self.state
    }

    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        writeln!(output, "{} shell, `help` for commands", self.table.name())?;

        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(());
            }

            let line = line.trim();
            match line {
                "" => continue,
                "quit" | "exit" => return Ok(()),
                _ => writeln!(output, "{}", self.eval(line))?,
            }
        }
    }

    /// Evaluates one line into its reply. Failures reply `error: ...`
    /// and touch nothing.
    pub fn eval(&mut self, line: &str) -> String {
        trace!("evaluating line {line:?}");

        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let args = words.collect::<Vec<&str>>();

        let reply = match (command, args.as_slice()) {
            ("show", []) => Ok(describe(self.table, self.state)),
            ("set", [bits]) => parse_bits(bits).map(|bits| {
                self.state = FlagSet::new(bits);
                describe(self.table, self.state)
            }),
            ("grant", names @ [_, ..]) => self.edit(names, FlagSet::grant),
            ("revoke", names @ [_, ..]) => self.edit(names, FlagSet::revoke),
            ("check", [name]) => resolve_flag(self.table, name).map(|flag| {
                let held = self.state.has(flag.mask());
                format!("{flag}: {}", if held { "on" } else { "off" })
            }),
            ("toggle", [arg]) => self.toggle(arg),
            ("pow2", [number]) => number
                .parse::<i64>()
                .map_err(|_| format!("`{number}` is not an integer"))
                .map(|n| {
                    if is_power_of_two(n) {
                        format!("{n} is a power of two")
                    } else {
                        format!("{n} is not a power of two")
                    }
                }),
            ("table", []) => Ok(self.table.to_string()),
            ("help", []) => Ok(HELP.into()),
            _ => Err(format!("unknown command `{line}` (try `help`)")),
        };

        reply.unwrap_or_else(|message| format!("error: {message}"))
    }

    fn edit(&mut self, names: &[&str], op: fn(FlagSet, FlagSet) -> FlagSet) -> Result<String, String> {
        // Resolve every name before editing anything, so one typo in a
        // multi-flag line leaves the whole word untouched.
        let mask = names
            .iter()
            .map(|name| resolve_flag(self.table, name).map(Flag::mask))
            .try_fold(FlagSet::EMPTY, |mask, flag| flag.map(|f| mask.grant(f)))?;

        self.state = op(self.state, mask);
        Ok(describe(self.table, self.state))
    }

    fn toggle(&mut self, arg: &str) -> Result<String, String> {
        let position = resolve_position(self.table, arg)?;

        self.state = self.state.toggle(position).map_err(|err| err.to_string())?;
        Ok(describe(self.table, self.state))
    }
}

pub fn parse_bits(text: &str) -> Result<u32, String> {
    text.parse::<u32>()
        .map_err(|_| format!("`{text}` is not an unsigned integer"))
}

pub fn resolve_flag(table: &FlagTable, name: &str) -> Result<Flag, String> {
    table
        .get(name)
        .ok_or_else(|| format!("unknown {} flag `{name}`", table.name()))
}

/// A leading ascii digit or `-` reads as a raw bit position; anything
/// else resolves as a flag name.
pub fn resolve_position(table: &FlagTable, arg: &str) -> Result<i32, String> {
    if arg.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        arg.parse::<i32>()
            .map_err(|_| format!("`{arg}` is not a bit position"))
    } else {
        resolve_flag(table, arg).map(|flag| flag.position as i32)
    }
}
