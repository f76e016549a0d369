use std::io::Cursor;

use calcium::interpreter::session::{Session, SessionConfig, SessionOutcome};

struct Run {
    outcome: SessionOutcome,
    output:  String,
    errors:  String,
}

fn run_with(input: &str, config: SessionConfig) -> Run {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let mut session = Session::new(Cursor::new(input.to_string()), &mut output, &mut errors, config);
    let outcome = session.run().expect("in-memory I/O cannot fail");
    drop(session);
    Run { outcome,
          output: String::from_utf8(output).unwrap(),
          errors: String::from_utf8(errors).unwrap() }
}

fn run(input: &str) -> Run {
    run_with(input,
             SessionConfig { prompt: String::new(),
                             ..SessionConfig::default() })
}

#[test]
fn evaluates_each_statement_in_order() {
    let r = run("1 + 2;\n2 * 3;\n");
    assert_eq!(r.output, "3.00\n6.00\n");
    assert!(r.errors.is_empty());
    assert_eq!(r.outcome, SessionOutcome::EndOfInput);
}

#[test]
fn several_statements_on_one_line() {
    let r = run("1; 2; 3;\n");
    assert_eq!(r.output, "1.00\n2.00\n3.00\n");
}

#[test]
fn statements_may_span_lines() {
    let r = run("(1 +\n2)\n* 3\n;\n");
    assert_eq!(r.output, "9.00\n");
}

#[test]
fn quit_ends_the_session() {
    let r = run("1;\nquit;\n2;\n");
    assert_eq!(r.outcome, SessionOutcome::Quit);
    assert_eq!(r.output, "1.00\n");
    assert!(r.errors.is_empty());
}

#[test]
fn quit_inside_an_expression_ends_the_session() {
    let r = run("1 + (2 * quit);\n5;\n");
    assert_eq!(r.outcome, SessionOutcome::Quit);
    assert!(r.output.is_empty());
}

#[test]
fn errors_discard_the_statement_and_resume() {
    let r = run("1 + ;\n(2;\n1 2;\n4 / 2;\n");
    assert_eq!(r.output, "2.00\n");
    assert_eq!(r.errors.lines().count(), 3);
    assert!(r.errors.contains("Unexpected token"));
    assert!(r.errors.contains("Invalid expression"));
    assert_eq!(r.outcome, SessionOutcome::EndOfInput);
}

#[test]
fn lexical_errors_are_reported() {
    let r = run("2 ^ 2; 3;");
    assert_eq!(r.output, "3.00\n");
    assert!(r.errors.contains("Unrecognized input: ^"));
}

#[test]
fn unterminated_final_statement_is_evaluated() {
    let r = run("1;\n2 + 2");
    assert_eq!(r.output, "1.00\n4.00\n");
    assert_eq!(r.outcome, SessionOutcome::EndOfInput);

    let r = run("quit");
    assert_eq!(r.outcome, SessionOutcome::Quit);
}

#[test]
fn invalid_utf8_is_reported_and_the_session_resumes() {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let config = SessionConfig { prompt: String::new(),
                                 ..SessionConfig::default() };
    let input = Cursor::new(b"1;\n\xff;\n2;\n".to_vec());
    let outcome = Session::new(input, &mut output, &mut errors, config).run()
                                                                       .expect("in-memory I/O cannot fail");

    assert_eq!(outcome, SessionOutcome::EndOfInput);
    assert_eq!(String::from_utf8(output).unwrap(), "1.00\n2.00\n");
    let errors = String::from_utf8(errors).unwrap();
    assert_eq!(errors.lines().count(), 1);
    assert!(errors.contains("Unrecognized input"));
}

#[test]
fn deep_nesting_is_reported_and_the_session_resumes() {
    let input = format!("{}1{};\n3;\n", "(".repeat(50_000), ")".repeat(50_000));
    let r = run(&input);
    assert_eq!(r.output, "3.00\n");
    assert!(r.errors.contains("nests deeper"));
}

#[test]
fn blank_input_ends_quietly() {
    let r = run("\n  \n");
    assert!(r.output.is_empty());
    assert!(r.errors.is_empty());
    assert_eq!(r.outcome, SessionOutcome::EndOfInput);
}

#[test]
fn empty_statement_is_an_error() {
    let r = run(";\n");
    assert!(r.output.is_empty());
    assert!(r.errors.contains("end of input"));
}

#[test]
fn prompt_and_precision_are_configurable() {
    let r = run_with("10 / 3;\n",
                     SessionConfig { prompt:    "> ".to_string(),
                                     precision: 4, });
    assert_eq!(r.output, "> 3.3333\n> ");
}

#[test]
fn default_config_uses_calc_prompt() {
    let config = SessionConfig::default();
    assert_eq!(config.prompt, "Calc> ");
    assert_eq!(config.precision, 2);
}
