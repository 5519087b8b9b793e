use std::{
    io::Error as IoError,
    process::{Command, Output, Stdio},
    fmt::{Display, Formatter, Result as FmtResult},
};
use log::*;
use crate::{Options, NULL_DEVICE};

/// Reason the compiler produced no usable output
///
/// Both variants are advisory: they are reported and otherwise ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Process could not be started
    Launch(String),
    /// Process exited unsuccessfully, `None` when terminated by a signal
    ExitStatus(Option<i32>),
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        use Failure::*;

        match self {
            Launch(e) => write!(f, "Unable to run compiler: {}", e),
            ExitStatus(Some(code)) => write!(f, "Compiler exited with status {}", code),
            ExitStatus(None) => write!(f, "Compiler terminated by signal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Zero exit, combined stdout and stderr text
    Exited(String),
    Failed(Failure),
}

/// Single `-v -E --language=c` run of a compiler
#[derive(Debug, Clone)]
pub struct CompilerInvocation {
    program: String,
    args: Vec<String>,
    env: Vec<(String, String)>,
}

impl CompilerInvocation {
    pub fn new(options: &Options) -> Self {
        Self {
            program: options.program.clone(),
            args: ["-v", "-E", "--language=c", NULL_DEVICE].iter()
                .map(|arg| arg.to_string()).collect(),
            env: options.env_overrides.clone(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        // overrides land on the child only
        cmd.args(&self.args)
            .envs(self.env.iter().map(|(name, value)| (name, value)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    /// Run the compiler and wait for it to exit
    pub fn run(&self) -> Outcome {
        debug!("Run `{}` with args: {:?}", self.program, self.args);

        match self.command().output() {
            Ok(output) => self.outcome(output),
            Err(e) => Outcome::Failed(Failure::Launch(self.launch_message(&e))),
        }
    }

    fn outcome(&self, output: Output) -> Outcome {
        if !output.status.success() {
            return Outcome::Failed(Failure::ExitStatus(output.status.code()));
        }

        Outcome::Exited(combine_output(&output.stdout, &output.stderr))
    }

    fn launch_message(&self, e: &IoError) -> String {
        format!("`{}`: {}", self.program, e)
    }
}

/// Join captured streams so stderr always starts on a fresh line
fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(stdout).into_owned();
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    // search list banner goes to stderr
    text.push_str(&String::from_utf8_lossy(stderr));
    text
}
