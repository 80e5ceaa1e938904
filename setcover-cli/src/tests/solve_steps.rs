//! Behaviour-driven step definitions driving the solve CLI scenarios.

use super::helpers::{ProblemDir, write_utf8};
use super::*;
use crate::report::SolveReport;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use setcover_core::{ProblemError, ProviderError, SolveError};
use std::cell::RefCell;

struct SolveWorld {
    dir: ProblemDir,
    problem: RefCell<Option<Utf8PathBuf>>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SolveWorld {
    fn new() -> Self {
        Self {
            dir: ProblemDir::new(),
            problem: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn use_problem_file(&self, contents: Option<&[u8]>) {
        let path = self.dir.problem_path();
        if let Some(bytes) = contents {
            write_utf8(&path, bytes);
        }
        self.problem.replace(Some(path));
    }

    fn push_args(&self, args: &[&str]) {
        self.cli_args
            .borrow_mut()
            .extend(args.iter().map(|arg| (*arg).to_owned()));
    }

    fn run(&self, argv: Vec<String>) {
        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let mut buffer = self.stdout.borrow_mut();
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Solve(args) => solve::run_solve(args, &mut *buffer),
            Command::Sample => write_sample(&mut *buffer),
        });
        self.result.replace(Some(outcome));
    }

    fn output(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    /// Parse the report that follows any trace lines.
    fn report(&self) -> SolveReport {
        let output = self.output();
        let start = if output.starts_with("{\n") {
            0
        } else {
            output
                .find("\n{\n")
                .map(|index| index + 1)
                .expect("report should follow the trace")
        };
        let json = output.get(start..).expect("report slice");
        serde_json::from_str(json).expect("output should end with a JSON report")
    }

    fn error(&self) -> String {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        format!("{error:?}")
    }

    fn assert_error(&self, check: impl FnOnce(&CliError) -> bool) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        assert!(check(error), "unexpected error {}", self.error());
    }
}

#[fixture]
fn world() -> SolveWorld {
    SolveWorld::new()
}

#[given("no problem file is supplied")]
fn no_problem_file(#[from(world)] world: &SolveWorld) {
    world.problem.replace(None);
}

#[given("a valid problem file exists on disk")]
fn valid_problem_file(#[from(world)] world: &SolveWorld) {
    let path = world.dir.write_sample();
    world.problem.replace(Some(path));
}

#[given("the problem file does not exist")]
fn missing_problem_file(#[from(world)] world: &SolveWorld) {
    world.use_problem_file(None);
}

#[given("the problem file contains invalid JSON")]
fn invalid_json_problem(#[from(world)] world: &SolveWorld) {
    world.use_problem_file(Some(b"{ not valid json"));
}

#[given("the problem file references an undeclared element")]
fn undeclared_element_problem(#[from(world)] world: &SolveWorld) {
    world.use_problem_file(Some(
        br#"{"elements": [{"name": "a", "cost": 1}], "sets": [{"name": "S1", "elements": ["a", "z"]}]}"#,
    ));
}

#[given("the budget is 30")]
fn budget_30(#[from(world)] world: &SolveWorld) {
    world.push_args(&["--budget", "30"]);
}

#[given("the budget is 0")]
fn budget_0(#[from(world)] world: &SolveWorld) {
    world.push_args(&["--budget", "0"]);
}

#[given("verbose output is requested")]
fn verbose_requested(#[from(world)] world: &SolveWorld) {
    world.push_args(&["--verbose"]);
}

#[given("the hill-climb strategy with 2 attempts is selected")]
fn hill_climb_selected(#[from(world)] world: &SolveWorld) {
    world.push_args(&["--strategy", "hill-climb", "--attempts", "2"]);
}

#[when("I run the solve command")]
fn run_solve_command(#[from(world)] world: &SolveWorld) {
    let mut argv = vec!["setcover".to_owned(), "solve".to_owned()];
    if let Some(path) = world.problem.borrow().as_ref() {
        argv.push(path.as_str().to_owned());
    }
    argv.extend(world.cli_args.borrow().iter().cloned());
    world.run(argv);
}

#[when("I run the sample command")]
fn run_sample_command(#[from(world)] world: &SolveWorld) {
    world.run(vec!["setcover".to_owned(), "sample".to_owned()]);
}

#[then("the command succeeds and reports a cover of S1 and S2")]
fn reports_s1_s2(#[from(world)] world: &SolveWorld) {
    let report = world.report();
    assert!(report.found);
    assert_eq!(report.solution, vec!["S1".to_owned(), "S2".to_owned()]);
    assert_eq!(report.cost, 24);
    assert_eq!(report.budget, 30);
}

#[then("the output starts with the depth 1 header")]
fn starts_with_header(#[from(world)] world: &SolveWorld) {
    let output = world.output();
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("Searching to depth 1"));
    assert_eq!(lines.next(), Some("Search terminated at depth 1"));
}

#[then("the report says no cover was found")]
fn no_cover(#[from(world)] world: &SolveWorld) {
    let report = world.report();
    assert!(!report.found);
    assert!(report.solution.is_empty());
}

#[then("the report shows 2 rounds")]
fn two_rounds(#[from(world)] world: &SolveWorld) {
    assert_eq!(world.report().diagnostics.rounds, 2);
}

#[then("the command fails because the budget is missing")]
fn fails_missing_budget(#[from(world)] world: &SolveWorld) {
    world.assert_error(|error| {
        matches!(
            error,
            CliError::MissingArgument {
                field: ARG_BUDGET,
                ..
            }
        )
    });
}

#[then("the command fails because the problem file is missing")]
fn fails_missing_problem(#[from(world)] world: &SolveWorld) {
    world.assert_error(|error| {
        matches!(
            error,
            CliError::MissingSourceFile {
                field: ARG_PROBLEM,
                ..
            }
        )
    });
}

#[then("the command fails because the problem is unavailable")]
fn fails_unavailable(#[from(world)] world: &SolveWorld) {
    world.assert_error(|error| {
        matches!(
            error,
            CliError::Solve {
                source: SolveError::Provider(ProviderError::Unavailable { .. })
            }
        )
    });
}

#[then("the command fails because the problem is malformed")]
fn fails_malformed(#[from(world)] world: &SolveWorld) {
    world.assert_error(|error| {
        matches!(
            error,
            CliError::Solve {
                source: SolveError::MalformedProblem(ProblemError::UnknownElement { .. })
            }
        )
    });
}

#[then("the output is the sample problem document")]
fn sample_document(#[from(world)] world: &SolveWorld) {
    let document: ProblemDocument =
        serde_json::from_str(&world.output()).expect("output should be a problem document");
    let problem = setcover_core::ProblemInstance::try_from(document).expect("valid document");
    assert_eq!(problem, sample_problem().expect("sample problem is valid"));
}

macro_rules! register_solve_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/solve_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SolveWorld) {
            let _ = world;
        }
    };
}

register_solve_scenario!(solve_sample, "solving the sample problem");
register_solve_scenario!(solve_from_json, "solving a problem from JSON");
register_solve_scenario!(solve_verbose, "printing the search trace");
register_solve_scenario!(solve_hill_climb, "hill climbing exhausts its attempts");
register_solve_scenario!(solve_missing_budget, "rejecting a missing budget");
register_solve_scenario!(solve_missing_problem, "rejecting a missing problem file");
register_solve_scenario!(solve_invalid_json, "rejecting invalid JSON input");
register_solve_scenario!(solve_undeclared_element, "rejecting sets with undeclared elements");
register_solve_scenario!(print_sample, "printing the sample problem");
