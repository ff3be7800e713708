//! Line-oriented command interpreter.
//!
//! Each line holds one command (`setState 1 2 5 3 4 0 6 7 8`,
//! `solve A* heuristic=h2 maxnodes=5000`, ...). Blank lines and lines
//! starting with `#` are ignored. All output goes to a caller-supplied
//! writer so the interpreter can be driven from stdin, a batch file or a
//! test buffer alike.
use crate::branching::effective_branching_factor;
use crate::comparison::{compare, CompareBudgets};
use crate::engine::{Move, Puzzle, State};
use crate::error::{Error, Result};
use crate::heuristics::Heuristic;
use crate::report::{comparison_table, outcome_lines};
use crate::solver::{search, Strategy, DEFAULT_DEPTH_LIMIT, DEFAULT_MAX_NODES};
use crate::utils::state_from_tokens;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// A parsed interpreter command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    SetState(State),
    PrintState,
    Move(Move),
    Scramble(usize),
    SetSeed(u64),
    Solve { strategy: Strategy, max_nodes: u64 },
    BranchingFactor { nodes: u64, depth: usize },
    Compare(CompareBudgets),
    Clear,
}

impl Command {
    /// Parses one line. Returns `Ok(None)` for blank lines and comments.
    ///
    /// # Errors
    /// Unknown commands, wrong argument counts, malformed numbers, unknown
    /// strategies or heuristics and invalid states are all reported as errors;
    /// nothing is silently defaulted.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::command::Command;
    /// use eight_puzzle::heuristics::Heuristic;
    /// use eight_puzzle::solver::Strategy;
    ///
    /// let cmd = Command::parse("solve A* heuristic=h2 maxnodes=500").unwrap();
    /// assert_eq!(
    ///     cmd,
    ///     Some(Command::Solve {
    ///         strategy: Strategy::AStar(Heuristic::Manhattan),
    ///         max_nodes: 500,
    ///     })
    /// );
    /// assert_eq!(Command::parse("# a comment").unwrap(), None);
    /// assert!(Command::parse("solve A* heuristic=h9").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let (name, args) = (parts[0], &parts[1..]);
        let command = match name {
            "setState" => Command::SetState(state_from_tokens(args)?),
            "printState" => {
                expect_args(name, args, 0)?;
                Command::PrintState
            }
            "move" => {
                expect_args(name, args, 1)?;
                Command::Move(args[0].parse()?)
            }
            "scrambleState" => {
                expect_args(name, args, 1)?;
                Command::Scramble(parse_number(args[0], "scramble steps")?)
            }
            "setSeed" => {
                expect_args(name, args, 1)?;
                Command::SetSeed(parse_number(args[0], "seed")?)
            }
            "solve" => parse_solve(args)?,
            "effectiveBranchingFactor" => {
                if args.len() != 2 {
                    return Err(Error::invalid_command(
                        "usage: effectiveBranchingFactor <nodes_generated> <solution_depth>",
                    ));
                }
                Command::BranchingFactor {
                    nodes: parse_number(args[0], "node count")?,
                    depth: parse_number(args[1], "solution depth")?,
                }
            }
            "compareSearch" => parse_compare(args)?,
            "clear" => {
                expect_args(name, args, 0)?;
                Command::Clear
            }
            other => {
                return Err(Error::UnknownCommand {
                    name: other.to_string(),
                })
            }
        };
        Ok(Some(command))
    }
}

fn expect_args(name: &str, args: &[&str], count: usize) -> Result<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(Error::invalid_command(format!(
            "{} takes {} argument(s), got {}",
            name,
            count,
            args.len()
        )))
    }
}

fn parse_number<T: FromStr>(token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::invalid_command(format!("invalid {} '{}'", what, token)))
}

/// Splits `key=value`, rejecting anything else.
fn split_option(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .ok_or_else(|| Error::invalid_command(format!("expected key=value, got '{}'", arg)))
}

fn unknown_option(key: &str) -> Error {
    Error::invalid_command(format!("unknown option '{}'", key))
}

fn parse_solve(args: &[&str]) -> Result<Command> {
    let (&name, options) = args
        .split_first()
        .ok_or_else(|| Error::invalid_command("solve requires a strategy (BFS, DFS or A*)"))?;
    let mut strategy: Strategy = name.parse()?;
    let mut max_nodes = DEFAULT_MAX_NODES;

    for &arg in options {
        let (key, value) = split_option(arg)?;
        match (key, &mut strategy) {
            ("maxnodes", _) => max_nodes = parse_number(value, "maxnodes")?,
            ("depthlimit", Strategy::DepthFirst { depth_limit }) => {
                *depth_limit = parse_number(value, "depthlimit")?
            }
            ("heuristic", Strategy::AStar(heuristic)) => *heuristic = value.parse::<Heuristic>()?,
            (other, _) => return Err(unknown_option(other)),
        }
    }
    Ok(Command::Solve {
        strategy,
        max_nodes,
    })
}

fn parse_compare(args: &[&str]) -> Result<Command> {
    let mut budgets = CompareBudgets::default();
    for &arg in args {
        let (key, value) = split_option(arg)?;
        match key {
            "bfs_maxnodes" => budgets.bfs_max_nodes = parse_number(value, key)?,
            "dfs_depth_limit" => budgets.dfs_depth_limit = parse_number(value, key)?,
            "dfs_maxnodes" => budgets.dfs_max_nodes = parse_number(value, key)?,
            "astar_h1_maxnodes" => budgets.astar_h1_max_nodes = parse_number(value, key)?,
            "astar_h2_maxnodes" => budgets.astar_h2_max_nodes = parse_number(value, key)?,
            other => return Err(unknown_option(other)),
        }
    }
    Ok(Command::Compare(budgets))
}

/// Whether a command that ran to completion achieved what it asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Succeeded,
    /// The command ran but did not succeed, e.g. a search gave up.
    Failed,
}

/// Interpreter state: the puzzle that commands operate on.
#[derive(Clone, Debug, Default)]
pub struct Session {
    puzzle: Puzzle,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Parses and runs one line. Blank lines and comments succeed without output.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Status> {
        match Command::parse(line)? {
            Some(command) => self.run(command, out),
            None => Ok(Status::Succeeded),
        }
    }

    /// Runs an already parsed command.
    pub fn run<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Status> {
        match command {
            Command::SetState(state) => self.puzzle.set_state(state),
            Command::PrintState => emit(out, &self.puzzle.state().to_string())?,
            Command::Move(mv) => self.puzzle.apply_move(mv)?,
            Command::Scramble(steps) => self.puzzle.scramble(steps),
            Command::SetSeed(seed) => self.puzzle.set_seed(seed),
            Command::Solve {
                strategy,
                max_nodes,
            } => {
                let outcome = search(strategy, self.puzzle.state(), max_nodes)?;
                for line in outcome_lines(strategy, &outcome, max_nodes) {
                    emit(out, &line)?;
                }
                if !outcome.is_solved() {
                    return Ok(Status::Failed);
                }
            }
            Command::BranchingFactor { nodes, depth } => {
                let b = effective_branching_factor(nodes, depth);
                emit(out, &format!("Effective Branching Factor: {}", b))?;
            }
            Command::Compare(budgets) => {
                let rows = compare(self.puzzle.state(), &budgets)?;
                emit(out, &comparison_table(&rows))?;
            }
            Command::Clear => {
                write!(out, "{}", CLEAR_SCREEN).map_err(|e| Error::io("write output", e))?
            }
        }
        Ok(Status::Succeeded)
    }

    /// Runs every line of `input` as a batch.
    ///
    /// Each line is echoed before it runs. A command that errors or fails is
    /// followed by `Error: Command failed: <line>` and the batch carries on.
    /// Returns the number of failed commands.
    pub fn run_script<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<usize> {
        let mut failures = 0;
        for line in input.lines() {
            let line = line.map_err(|e| Error::io("read command", e))?;
            let line = line.trim();
            emit(out, line)?;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let status = match self.execute(line, out) {
                Ok(status) => status,
                Err(Error::Io { operation, source }) => return Err(Error::Io { operation, source }),
                Err(err) => {
                    emit(out, &format!("Error: {}", err))?;
                    Status::Failed
                }
            };
            if status == Status::Failed {
                emit(out, &format!("Error: Command failed: {}", line))?;
                failures += 1;
            }
        }
        Ok(failures)
    }

    /// Runs the commands stored in the file at `path`. See [`Session::run_script`].
    pub fn run_file<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<usize> {
        let file = fs::File::open(path)
            .map_err(|e| Error::io(format!("open {}", path.display()), e))?;
        self.run_script(BufReader::new(file), out)
    }

    /// Prompts for commands until `quit` or end of input.
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<()> {
        emit(out, "Interactive mode. Enter commands (type 'quit' to exit):")?;
        loop {
            write!(out, "> ")
                .and_then(|_| out.flush())
                .map_err(|e| Error::io("write prompt", e))?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .map_err(|e| Error::io("read command", e))?;
            if read == 0 || line.trim().eq_ignore_ascii_case("quit") {
                break;
            }

            match self.execute(&line, out) {
                Ok(_) => {}
                Err(Error::Io { operation, source }) => return Err(Error::Io { operation, source }),
                Err(err) => emit(out, &format!("Error: {}", err))?,
            }
        }
        Ok(())
    }
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<()> {
    writeln!(out, "{}", line).map_err(|e| Error::io("write output", e))
}
