mod commands;
mod helper;

use std::io::Write;
use std::sync::Arc;

use arrow::error::ArrowError;
use commands::all_commands_info;
pub use commands::Command;
use helper::CliHelper;
use rustyline::{error::ReadlineError, Editor};
use tracing::info;

use crate::controllers::{
    DatabaseListController, PersistenceTrigger, RowListController, TableListController,
};
use crate::rest::RestClient;
use crate::view::pretty::{format_batch, format_options, format_rows};
use crate::view::{StatusBanner, StatusKind};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed formatting output: {0}")]
    Format(#[from] ArrowError),

    #[error(transparent)]
    Readline(#[from] ReadlineError),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// The page the console is currently on
#[derive(Debug)]
pub enum Page {
    Databases(DatabaseListController),
    Tables(TableListController),
    Rows(RowListController),
}

impl Page {
    fn status(&self) -> &StatusBanner {
        match self {
            Page::Databases(c) => c.status(),
            Page::Tables(c) => c.status(),
            Page::Rows(c) => c.status(),
        }
    }

    fn database(&self) -> Option<&str> {
        match self {
            Page::Databases(_) => None,
            Page::Tables(c) => Some(c.database()),
            Page::Rows(c) => Some(c.database()),
        }
    }

    async fn load(&mut self) {
        match self {
            Page::Databases(c) => c.load().await,
            Page::Tables(c) => c.load().await,
            Page::Rows(c) => c.load().await,
        }
    }
}

pub struct DbmsCli {
    client: Arc<dyn RestClient>,
    page: Page,
    save: PersistenceTrigger,
    history_file: String,
}

impl DbmsCli {
    // Instantiate new CLI instance, sitting on a not yet loaded database list
    pub fn new(client: Arc<dyn RestClient>, history_file: String) -> Self {
        DbmsCli {
            page: Page::Databases(DatabaseListController::new(client.clone())),
            save: PersistenceTrigger::new(client.clone()),
            client,
            history_file,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    fn prompt(&self) -> String {
        match &self.page {
            Page::Databases(_) => "dbms> ".to_string(),
            Page::Tables(c) => format!("{}> ", c.database()),
            Page::Rows(c) => format!("{}.{}> ", c.database(), c.table()),
        }
    }

    // Interactive loop for running commands from a CLI
    pub async fn repl_loop(&mut self) -> Result<()> {
        let mut rl = Editor::new()?;
        rl.set_helper(Some(CliHelper {}));
        rl.load_history(&self.history_file).ok();

        let mut stdout = std::io::stdout();
        self.handle_command(&Command::Databases, &mut stdout).await?;

        loop {
            match rl.readline(self.prompt().as_str()) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) if line.trim_start().starts_with('\\') => {
                    rl.add_history_entry(line.trim_end())?;
                    let line = line.trim();
                    match line[1..].parse::<Command>() {
                        Ok(Command::Quit) => break,
                        Ok(cmd) => {
                            if let Err(e) = self.handle_command(&cmd, &mut stdout).await {
                                eprintln!("{e}")
                            }
                        }
                        Err(_) => eprintln!("'{line}' is not a valid command"),
                    }
                }
                Ok(line) => {
                    eprintln!(
                        "'{}' is not a valid command, commands start with '\\' (try \\?)",
                        line.trim()
                    );
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("\\q");
                    break;
                }
                Err(err) => {
                    eprintln!("Error while reading input: {err:?}",);
                    break;
                }
            }
        }

        Ok(rl.save_history(&self.history_file)?)
    }

    // Handle a client command. Quitting is up to the caller.
    pub async fn handle_command<W: Write>(&mut self, cmd: &Command, out: &mut W) -> Result<()> {
        match cmd {
            Command::Quit => Ok(()),
            Command::Help => {
                writeln!(out, "{}", format_batch(all_commands_info()?)?)?;
                Ok(())
            }
            Command::Show => self.print_page(out),
            Command::Html => {
                writeln!(out, "{}", self.page_html())?;
                Ok(())
            }
            Command::Reload => self.reload(out).await,
            Command::Databases => {
                self.navigate(
                    Page::Databases(DatabaseListController::new(self.client.clone())),
                    out,
                )
                .await
            }
            Command::Use(database) => {
                self.navigate(
                    Page::Tables(TableListController::new(self.client.clone(), database)),
                    out,
                )
                .await
            }
            Command::Open(table) => match self.page.database() {
                Some(database) => {
                    let page = Page::Rows(RowListController::new(
                        self.client.clone(),
                        database,
                        table,
                    ));
                    self.navigate(page, out).await
                }
                None => usage_error(out, "Open a database first with \\use <database>"),
            },
            Command::Back => {
                let page = match &self.page {
                    Page::Databases(_) => return Ok(()),
                    Page::Tables(_) => {
                        Page::Databases(DatabaseListController::new(self.client.clone()))
                    }
                    Page::Rows(c) => Page::Tables(TableListController::new(
                        self.client.clone(),
                        c.database(),
                    )),
                };
                self.navigate(page, out).await
            }
            Command::Create(args) => {
                let before = self.page.status().updates();
                match &mut self.page {
                    Page::Databases(c) => c.create(args).await,
                    Page::Tables(c) => {
                        let (name, sql) = args.split_once(' ').unwrap_or((args.as_str(), ""));
                        c.create(name, sql.trim()).await
                    }
                    Page::Rows(c) => c.create(args).await,
                }
                print_status(out, self.page.status(), before)
            }
            Command::Delete(arg) => {
                let before = self.page.status().updates();
                match &mut self.page {
                    Page::Databases(c) => c.delete(arg).await,
                    Page::Tables(c) => c.delete(arg).await,
                    Page::Rows(c) => c.delete(arg).await,
                }
                print_status(out, self.page.status(), before)
            }
            Command::Update(id, data) => match &mut self.page {
                Page::Rows(c) => {
                    let before = c.status().updates();
                    c.update(id, data).await;
                    print_status(out, c.status(), before)
                }
                _ => usage_error(out, "\\update only works on a table page"),
            },
            Command::Get(id) => match &mut self.page {
                Page::Rows(c) => {
                    let before = c.status().updates();
                    if let Some(row) = c.fetch(id).await {
                        let values = row
                            .data
                            .iter()
                            .map(|v| match v {
                                serde_json::Value::String(s) => s.clone(),
                                other => other.to_string(),
                            })
                            .collect::<Vec<_>>();
                        writeln!(out, "{}: {}", row.id, values.join(", "))?;
                    }
                    print_status(out, c.status(), before)
                }
                _ => usage_error(out, "\\get only works on a table page"),
            },
            Command::Save => {
                let before = self.save.status().updates();
                self.save.save().await;
                print_status(out, self.save.status(), before)
            }
        }
    }

    async fn navigate<W: Write>(&mut self, page: Page, out: &mut W) -> Result<()> {
        self.page = page;
        info!("Opening {}", self.prompt().trim_end_matches("> "));
        self.reload(out).await
    }

    async fn reload<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let before = self.page.status().updates();
        self.page.load().await;
        print_status(out, self.page.status(), before)?;
        self.print_page(out)
    }

    fn print_page<W: Write>(&self, out: &mut W) -> Result<()> {
        let table = match &self.page {
            Page::Databases(c) => format_options("database", c.databases())?,
            Page::Tables(c) => format_options("table", c.tables())?,
            Page::Rows(c) => format_rows(c.rows())?,
        };
        writeln!(out, "{table}")?;
        Ok(())
    }

    fn page_html(&self) -> String {
        let (status, body) = match &self.page {
            Page::Databases(c) => (c.status(), c.databases().to_html()),
            Page::Tables(c) => (c.status(), c.tables().to_html()),
            Page::Rows(c) => (c.status(), c.rows().to_html()),
        };
        format!("{}{}", status.to_html(), body)
    }
}

// Print every banner update made since `before`, in order. A success
// without a message prints nothing.
fn print_status<W: Write>(out: &mut W, status: &StatusBanner, before: usize) -> Result<()> {
    for (kind, message) in status.updates_since(before) {
        match kind {
            StatusKind::Success if message.is_empty() => {}
            StatusKind::Success => writeln!(out, "{message}")?,
            StatusKind::Error => writeln!(out, "Error: {message}")?,
        }
    }
    Ok(())
}

fn usage_error<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "Error: {message}")?;
    Ok(())
}
