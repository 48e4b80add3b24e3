use crate::command::{Command, HELP};
use crate::config::Config;
use crate::render;
use anyhow::Result;
use skillswap_wizard::{FormCollaborator, FormSubmission, Outcome, Page, Transition, WizardError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;
use tracing::{error, info, warn};

/// Form collaborator that prints each submission as a JSON line
struct PrintedForm;

impl FormCollaborator for PrintedForm {
    fn submit(&mut self, submission: FormSubmission) -> skillswap_wizard::error::Result<()> {
        let line =
            serde_json::to_string(&submission).map_err(|e| WizardError::Submit(e.to_string()))?;
        println!("POST {}", line);
        Ok(())
    }
}

/// Console service - drives one wizard page from stdin
pub struct ConsoleService {
    config: Config,
}

impl ConsoleService {
    /// Create a new console service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the console service
    pub async fn run(self) -> Result<()> {
        skillswap_logging::init_logging(&self.config.logging.level, self.config.logging.json)?;
        info!("Starting SkillSwap wizard console");

        let layout = self.config.layout()?;
        let mut page = layout.into_page(self.config.wizard.unknown_target, PrintedForm)?;
        info!(
            "Page {} ready, unknown targets handled with {:?}",
            page.id(),
            page.navigator().policy()
        );

        self.print_state(&page)?;
        println!("{}", HELP);

        let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());

        // Setup signal handler for graceful shutdown
        let shutdown = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to install Ctrl+C handler: {}", e);
            }
            info!("Received shutdown signal");
        };
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                line = lines.next() => {
                    let Some(line) = line else {
                        info!("Input closed");
                        break;
                    };
                    if !self.handle_line(&mut page, &line?)? {
                        break;
                    }
                }
                _ = &mut shutdown => {
                    info!("Shutting down gracefully...");
                    break;
                }
            }
        }

        info!("Wizard console stopped");
        Ok(())
    }

    /// Handle one input line; returns `false` when the user asked to quit
    fn handle_line(&self, page: &mut Page<PrintedForm>, line: &str) -> Result<bool> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(message) => {
                println!("{}", message);
                return Ok(true);
            }
        };

        match command {
            Command::Activate { control, source } => match page.dispatch(&control, source)? {
                Outcome::Navigated(transition) => {
                    if let Transition::Refused(target) = transition {
                        println!("section {} does not exist, staying put", target);
                    }
                    self.print_state(page)?;
                }
                Outcome::Submitted => {}
                Outcome::Ignored => println!("no control named '{}'", control),
            },
            Command::Goto(target) => {
                page.navigator_mut().show_step(target);
                self.print_state(page)?;
            }
            Command::Set { field, value } => {
                if !page.set_field(&field, value) {
                    warn!("Field '{}' is not part of this form", field);
                    println!("no field named '{}'", field);
                }
            }
            Command::State => self.print_state(page)?,
            Command::Help => println!("{}", HELP),
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn print_state(&self, page: &Page<PrintedForm>) -> Result<()> {
        if self.config.output.json {
            println!("{}", render::json(page.navigator())?);
        } else {
            print!("{}", render::text(page.navigator()));
        }
        Ok(())
    }
}
