//! Subprocess execution.
//!
//! Every external tool goes through [`ProcessRunner`] so the fallback chains
//! can be exercised in tests with [`MockRunner`] instead of real processes.

use std::collections::{HashMap, VecDeque};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use crate::error::{CmdocError, Result};

use super::signal::SigintGuard;

/// A single subprocess call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run, looked up on PATH.
    pub program: String,

    /// Arguments, passed verbatim (no shell).
    pub args: Vec<String>,

    /// Variables added to the child's environment only.
    pub env: Vec<(String, String)>,

    /// Data written to the child's stdin (if None, stdin is inherited).
    pub stdin: Option<String>,

    /// Discard stderr instead of inheriting it.
    pub quiet_stderr: bool,
}

impl Invocation {
    /// Create an invocation of `program` with no arguments.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            ..Default::default()
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add a variable to the child's environment.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Feed `input` to the child's stdin.
    pub fn stdin(mut self, input: String) -> Self {
        self.stdin = Some(input);
        self
    }

    /// Send the child's stderr to the null device.
    pub fn quiet_stderr(mut self) -> Self {
        self.quiet_stderr = true;
        self
    }

    /// Human-readable command line (for logs and errors).
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit information of a completed subprocess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitInfo {
    /// Exit code (None if killed by signal).
    pub code: Option<i32>,
}

impl ExitInfo {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Exit information plus captured stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// Exit information.
    pub exit: ExitInfo,

    /// Standard output, lossily decoded.
    pub stdout: String,
}

/// Runs subprocesses, blocking until they exit.
pub trait ProcessRunner {
    /// Run with stdout inherited.
    fn status(&mut self, invocation: &Invocation) -> Result<ExitInfo>;

    /// Run with stdout captured.
    fn output(&mut self, invocation: &Invocation) -> Result<Captured>;
}

/// [`ProcessRunner`] backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }

    fn build(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }
        if invocation.quiet_stderr {
            cmd.stderr(Stdio::null());
        } else {
            cmd.stderr(Stdio::inherit());
        }
        cmd
    }
}

/// Map a spawn failure to a domain error.
fn spawn_error(invocation: &Invocation, err: std::io::Error) -> CmdocError {
    if err.kind() == std::io::ErrorKind::NotFound {
        CmdocError::ToolUnavailable {
            tool: invocation.program.clone(),
        }
    } else {
        CmdocError::Io(err)
    }
}

impl ProcessRunner for SystemRunner {
    fn status(&mut self, invocation: &Invocation) -> Result<ExitInfo> {
        tracing::debug!("Running: {}", invocation.command_line());

        let mut cmd = Self::build(invocation);
        cmd.stdout(Stdio::inherit());
        if invocation.stdin.is_none() {
            cmd.stdin(Stdio::inherit());
        }

        let mut child = cmd.spawn().map_err(|e| spawn_error(invocation, e))?;
        // Installed after spawn so the child keeps the default disposition.
        let _guard = SigintGuard::ignore();
        let status = child.wait()?;
        Ok(ExitInfo {
            code: status.code(),
        })
    }

    fn output(&mut self, invocation: &Invocation) -> Result<Captured> {
        tracing::debug!("Capturing: {}", invocation.command_line());

        let mut cmd = Self::build(invocation);
        cmd.stdout(Stdio::piped());
        if invocation.stdin.is_some() {
            cmd.stdin(Stdio::piped());
        } else {
            cmd.stdin(Stdio::inherit());
        }

        let mut child = cmd.spawn().map_err(|e| spawn_error(invocation, e))?;
        let _guard = SigintGuard::ignore();

        // The child may fill its stdout pipe before draining stdin.
        let writer = match (invocation.stdin.clone(), child.stdin.take()) {
            (Some(input), Some(mut pipe)) => Some(thread::spawn(move || {
                let _ = pipe.write_all(input.as_bytes());
            })),
            _ => None,
        };

        let output = child.wait_with_output()?;
        if let Some(handle) = writer {
            let _ = handle.join();
        }

        Ok(Captured {
            exit: ExitInfo {
                code: output.status.code(),
            },
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}

/// Scripted outcome for [`MockRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Exit with the given code and no output.
    Exit(i32),
    /// Exit with the given code after printing `stdout`.
    Output(i32, String),
    /// Killed by a signal (no exit code).
    Signaled,
    /// The program cannot be spawned.
    Missing,
}

/// Mock runner for testing.
///
/// Records every invocation and replays scripted responses. Responses are
/// keyed by `"program first-arg"` or by `"program"`, the more specific key
/// winning. Queued responses are consumed in order, then fixed responses
/// apply; anything unscripted behaves as a missing program.
#[derive(Debug, Default)]
pub struct MockRunner {
    fixed: HashMap<String, MockResponse>,
    queued: HashMap<String, VecDeque<MockResponse>>,
    invocations: Vec<Invocation>,
}

impl MockRunner {
    /// Create a runner where every program is missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer `key` with `response`.
    pub fn respond(mut self, key: &str, response: MockResponse) -> Self {
        self.fixed.insert(key.to_string(), response);
        self
    }

    /// Answer `key` with `responses` in order.
    pub fn queue(mut self, key: &str, responses: Vec<MockResponse>) -> Self {
        self.queued
            .insert(key.to_string(), responses.into_iter().collect());
        self
    }

    /// All recorded invocations.
    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    /// Recorded command lines (`program arg ...`).
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations.iter().map(|i| i.command_line()).collect()
    }

    /// Recorded invocations of one program.
    pub fn calls_to(&self, program: &str) -> Vec<&Invocation> {
        self.invocations
            .iter()
            .filter(|i| i.program == program)
            .collect()
    }

    fn next_response(&mut self, invocation: &Invocation) -> MockResponse {
        let mut keys = Vec::with_capacity(2);
        if let Some(first) = invocation.args.first() {
            keys.push(format!("{} {}", invocation.program, first));
        }
        keys.push(invocation.program.clone());

        for key in &keys {
            if let Some(response) = self.queued.get_mut(key).and_then(VecDeque::pop_front) {
                return response;
            }
            if let Some(response) = self.fixed.get(key) {
                return response.clone();
            }
        }
        MockResponse::Missing
    }

    fn run(&mut self, invocation: &Invocation) -> Result<Captured> {
        self.invocations.push(invocation.clone());
        let (code, stdout) = match self.next_response(invocation) {
            MockResponse::Exit(code) => (Some(code), String::new()),
            MockResponse::Output(code, stdout) => (Some(code), stdout),
            MockResponse::Signaled => (None, String::new()),
            MockResponse::Missing => {
                return Err(CmdocError::ToolUnavailable {
                    tool: invocation.program.clone(),
                })
            }
        };
        Ok(Captured {
            exit: ExitInfo { code },
            stdout,
        })
    }
}

impl ProcessRunner for MockRunner {
    fn status(&mut self, invocation: &Invocation) -> Result<ExitInfo> {
        self.run(invocation).map(|captured| captured.exit)
    }

    fn output(&mut self, invocation: &Invocation) -> Result<Captured> {
        self.run(invocation)
    }
}
