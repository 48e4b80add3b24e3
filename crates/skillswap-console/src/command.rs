use skillswap_types::ActivationSource;

/// One line of console input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate a control
    Activate {
        control: String,
        source: ActivationSource,
    },
    /// Jump straight to a section
    Goto(u32),
    /// Fill in a form field
    Set { field: String, value: String },
    State,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  click <control>       activate a control with the pointer
  key <control>         activate a control with the keyboard
  goto <id>             show a section directly
  set <field> <value>   fill in a form field
  state                 print the current wizard state
  help                  show this message
  quit                  leave";

impl Command {
    /// Parse a console line; `Ok(None)` for blank lines
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb {
            "click" | "key" => {
                if rest.is_empty() {
                    return Err(format!("usage: {} <control>", verb));
                }
                let source = if verb == "key" {
                    ActivationSource::Keyboard
                } else {
                    ActivationSource::Pointer
                };
                Command::Activate {
                    control: rest.to_string(),
                    source,
                }
            }
            "goto" => Command::Goto(
                rest.parse()
                    .map_err(|_| format!("goto: '{}' is not a section id", rest))?,
            ),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("usage: set <field> <value>".to_string());
                }
                Command::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                }
            }
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{}', try 'help'", other)),
        };

        Ok(Some(command))
    }
}
