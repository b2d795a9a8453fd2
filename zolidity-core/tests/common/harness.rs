//! Test harness for running fixture cases with stochastic variations

use crate::common::{Gen, TestCase};
use zolidity_core::*;

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: String,
    pub start: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub position: usize,
    pub seed: u64,
    pub errors: Vec<String>,
}

fn literal_text<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    literal(cursor).map(|lit| lit.text)
}

fn elementary_type_text<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    elementary_type(cursor).map(|(_, text)| text)
}

/// Look up a rule by the name fixtures use for it
pub fn rule_by_name(name: &str) -> Rule {
    match name {
        "identifier" => identifier,
        "boolean_literal" => boolean_literal,
        "decimal_digits" => decimal_digits,
        "hex_number" => hex_number,
        "decimal_number" => decimal_number,
        "number_literal" => number_literal,
        "escape_sequence" => escape_sequence,
        "empty_string" => empty_string,
        "quoted_string" => quoted_string,
        "non_empty_string" => non_empty_string,
        "string_literal" => string_literal,
        "hex_string" => hex_string,
        "hex_string_literal" => hex_string_literal,
        "unicode_string" => unicode_string,
        "unicode_string_literal" => unicode_string_literal,
        "unsigned_integer_type" => unsigned_integer_type,
        "signed_integer_type" => signed_integer_type,
        "fixed_bytes" => fixed_bytes,
        "number_unit" => number_unit,
        "elementary_type" => elementary_type_text,
        "literal" => literal_text,
        other => panic!("Unknown rule in fixture: {}", other),
    }
}

/// Run `case.input` embedded at `start` of `input` and check the outcome
fn check(case: &TestCase, input: String, start: usize, seed: u64) -> TestResult {
    let rule = rule_by_name(&case.rule);
    let mut cursor = Cursor::starting_at(&input, start)
        .unwrap_or_else(|| panic!("{}: start {} is not a char boundary", case.id, start));
    let actual = rule(&mut cursor).map(str::to_string);
    let position = cursor.position();

    let mut errors = Vec::new();
    if actual != case.expect {
        errors.push(format!("Match mismatch: expected {:?}, got {:?}", case.expect, actual));
    }

    let expected_position = start + case.expect.as_ref().map_or(0, String::len);
    if position != expected_position {
        errors.push(format!(
            "Cursor at {}, expected {}",
            position, expected_position
        ));
    }

    TestResult {
        passed: errors.is_empty(),
        input,
        start,
        expected: case.expect.clone(),
        actual,
        position,
        seed,
        errors,
    }
}

/// Run a single test case (canonical, no variations)
pub fn run_test(case: &TestCase) -> TestResult {
    check(case, case.input.clone(), 0, 0)
}

/// Run test with stochastic variations
///
/// Applies independent variations:
/// - 60% chance of leading context, rule started after it
/// - 60% chance of a trailing suffix that cannot extend the token
pub fn run_with_variations(case: &TestCase, gen: &mut Gen) -> TestResult {
    let mut input = String::new();

    if gen.chance(0.6) {
        input.push_str(&gen.prefix());
    }
    let start = input.len();
    input.push_str(&case.input);

    if gen.chance(0.6) {
        input.push_str(gen.suffix());
    }

    check(case, input, start, gen.seed)
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set ZOLIDITY_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nInput (rule starts at {}):", self.start);
        eprintln!("{:?}", self.input);
        eprintln!("\nExpected: {:?}", self.expected);
        eprintln!("Actual:   {:?} (cursor at {})", self.actual, self.position);
        eprintln!("\nErrors:");
        for e in &self.errors {
            eprintln!("  - {}", e);
        }
    }
}
