//! Behaviour-driven step definitions driving the unbind CLI scenarios.

use super::helpers::{Workspace, write_books, write_utf8};
use super::*;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use unbind_core::test_support::{seed_library, self_help_candidate};

#[derive(Debug)]
struct CliWorld {
    workspace: Workspace,
    subcommand: RefCell<&'static str>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CliWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            subcommand: RefCell::new("coach"),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec![
            "unbind".to_owned(),
            (*self.subcommand.borrow()).to_owned(),
            self.workspace.library().into_string(),
        ];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn push_args<const N: usize>(&self, args: [String; N]) {
        self.cli_args.borrow_mut().extend(args);
    }

    fn output(&self) -> serde_json::Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON")
    }

    fn error_matches(&self, predicate: fn(&CliError) -> bool) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        assert!(predicate(error), "unexpected error {error:?}");
    }
}

#[fixture]
fn world() -> CliWorld {
    CliWorld::new()
}

#[given("the seed library exists on disk")]
fn seed_library_exists(#[from(world)] world: &CliWorld) {
    write_books(&world.workspace.library(), &seed_library());
}

#[given("the library contains invalid JSON")]
fn library_contains_invalid_json(#[from(world)] world: &CliWorld) {
    write_utf8(&world.workspace.library(), b"[{ not valid json");
}

#[given("a self-help candidate file exists on disk")]
fn candidate_file_exists(#[from(world)] world: &CliWorld) {
    world.workspace.candidate(&self_help_candidate());
}

#[given("I coach the Da Vinci Code by title")]
fn coach_da_vinci(#[from(world)] world: &CliWorld) {
    world.push_args([format!("--{ARG_TITLE}"), "The Da Vinci Code".to_owned()]);
}

#[given("I coach the candidate file and count it in the library")]
fn coach_candidate_file(#[from(world)] world: &CliWorld) {
    world.push_args([
        format!("--{ARG_CANDIDATE}"),
        world.workspace.path("candidate.json").into_string(),
        format!("--{ARG_INCLUDE_CANDIDATE}"),
    ]);
}

#[given("I ask for library insights")]
fn ask_for_insights(#[from(world)] world: &CliWorld) {
    world.subcommand.replace("insights");
}

#[when("I run the unbind command")]
fn run_unbind_command(#[from(world)] world: &CliWorld) {
    let invocation = world.build_command_line();
    let outcome = Cli::try_parse_from(invocation)
        .map_err(CliError::from)
        .and_then(|cli| {
            let mut buffer = world.stdout.borrow_mut();
            dispatch(cli.command, &mut *buffer)
        });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and recommends pushing on")]
fn command_recommends_push(#[from(world)] world: &CliWorld) {
    let json = world.output();
    assert_eq!(json["recommendation"], "PUSH");
    assert_eq!(json["pushScore"], 100);
}

#[then("the command succeeds and recommends quitting with sixty percent confidence")]
fn command_recommends_quit(#[from(world)] world: &CliWorld) {
    let json = world.output();
    assert_eq!(json["recommendation"], "QUIT");
    assert_eq!(json["confidence"], 60);
    assert_eq!(
        json["reasons"][0],
        "Low Investment: Only 10% in. Quitting now is cheap."
    );
}

#[then("the command fails because no book was chosen")]
fn command_fails_without_book(#[from(world)] world: &CliWorld) {
    world.error_matches(|err| matches!(err, CliError::MissingCandidate));
}

#[then("the command fails because the library JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &CliWorld) {
    world.error_matches(|err| matches!(err, CliError::ParseInput { .. }));
}

#[then("the command succeeds and reports a forty percent finish rate")]
fn command_reports_finish_rate(#[from(world)] world: &CliWorld) {
    let json = world.output();
    assert_eq!(json["finishRate"], 40);
    assert_eq!(json["total"], 5);
}

macro_rules! register_cli_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/coach_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CliWorld) {
            let _ = world;
        }
    };
}

register_cli_scenario!(coach_by_title, "coaching a library book by title");
register_cli_scenario!(coach_candidate_file_scenario, "coaching a new book from a candidate file");
register_cli_scenario!(coach_without_book, "rejecting a coach request without a book");
register_cli_scenario!(coach_invalid_json, "rejecting a library with invalid JSON");
register_cli_scenario!(insights_summary, "summarising the library");
