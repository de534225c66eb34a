//! Thin wrapper around the `sqlplus` command-line client.
//!
//! Each query is an independent silent-mode invocation; the SQL script is
//! piped to the child's stdin with CSV markup directives so stdout comes
//! back as delimited text with a header line.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::config::ConnectionSettings;

/// Formatting directives prepended to every piped script. `SET MARKUP CSV ON`
/// needs Oracle 12.2+; the rest suppress pagination, feedback and wrapping.
const FORMAT_DIRECTIVES: [&str; 7] = [
    "SET PAGESIZE 0",
    "SET FEEDBACK OFF",
    "SET HEADING ON",
    "SET TERMOUT ON",
    "SET TRIMSPOOL ON",
    "SET LINESIZE 32767",
    "SET MARKUP CSV ON",
];

#[derive(thiserror::Error, Debug)]
pub enum ExecError {
    #[error("sqlplus executable not found at '{0}'")]
    NotFound(String),
    #[error("failed to run sqlplus: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlplus exited with {status}: {detail}")]
    Exit { status: String, detail: String },
    #[error("sqlplus reported an error: {0}")]
    Sql(String),
}

/// Builds the full script piped to sqlplus: directives, the statement
/// (terminated with `;`), then `EXIT;` so the child always quits.
pub fn batch_script(sql: &str) -> String {
    let mut lines: Vec<String> = FORMAT_DIRECTIVES.iter().map(|d| d.to_string()).collect();
    let statement = sql.trim_end();
    if statement.ends_with(';') {
        lines.push(statement.to_string());
    } else {
        lines.push(format!("{statement};"));
    }
    lines.push("EXIT;".to_string());
    lines.join("\n")
}

pub struct SqlPlusClient {
    user: String,
    password: String,
    dsn: String,
    executable: String,
}

impl SqlPlusClient {
    pub fn new(settings: &ConnectionSettings) -> Self {
        Self {
            user: settings.user.clone(),
            password: settings.password.clone(),
            dsn: settings.dsn.clone(),
            executable: settings.sqlplus_path.clone(),
        }
    }

    fn connect_string(&self) -> String {
        format!("{}/{}@{}", self.user, self.password, self.dsn)
    }

    fn spawn_error(&self, err: std::io::Error) -> ExecError {
        if err.kind() == ErrorKind::NotFound {
            ExecError::NotFound(self.executable.clone())
        } else {
            ExecError::Io(err)
        }
    }

    /// Checks that the configured executable is reachable (`sqlplus -V`).
    /// A real connection is only established per query.
    pub fn verify(&self) -> Result<(), ExecError> {
        let output = Command::new(&self.executable)
            .arg("-V")
            .output()
            .map_err(|e| self.spawn_error(e))?;
        if !output.status.success() {
            return Err(ExecError::Exit {
                status: output.status.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        log::info!("sqlplus executable found at '{}'", self.executable);
        Ok(())
    }

    /// Runs one SELECT statement and returns the raw CSV stdout.
    pub fn run_query(&self, sql: &str) -> Result<String, ExecError> {
        let script = batch_script(sql);
        log::debug!("piping script to sqlplus as {}@{}", self.user, self.dsn);

        let mut child = Command::new(&self.executable)
            .arg("-S")
            .arg(self.connect_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(script.as_bytes())?;
        }
        let output = child.wait_with_output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() { stdout } else { stderr };
            return Err(ExecError::Exit {
                status: output.status.to_string(),
                detail,
            });
        }

        // Silent mode still prints ORA-/SP2- diagnostics on stdout with a
        // zero exit code, so scan for them before handing the text on.
        if let Some(line) = stdout
            .lines()
            .find(|line| line.starts_with("ORA-") || line.starts_with("SP2-"))
        {
            return Err(ExecError::Sql(line.to_string()));
        }

        log::info!("sqlplus query executed successfully");
        Ok(stdout)
    }
}
