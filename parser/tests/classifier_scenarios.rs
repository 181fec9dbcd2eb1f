use argsift_core::ParserSpec;
use argsift_parser::{ArgumentParser, parse_args};

const OPTIONS: &str = "-c,-b|--binary";
const ARGUMENTS: &str = "-o|--output";

#[test]
fn test_full_invocation_classifies_every_token() {
    let argv = ["prog", "-b", "--output", "out.txt", "file.bin"];
    let parser = parse_args(&argv, OPTIONS, ARGUMENTS, 1);

    assert!(!parser.is_invalid());
    assert!(parser.invalid_tokens().is_empty());
    assert!(!parser.is_option_set("-c"));
    assert!(parser.is_option_set("--binary"));
    assert_eq!(parser.argument_value("-o"), "out.txt");
    assert_eq!(parser.non_options(), ["file.bin"]);
}

#[test]
fn test_unknown_flag_is_reported_verbatim() {
    let argv = ["prog", "-b", "-x", "file.bin"];
    let parser = parse_args(&argv, OPTIONS, ARGUMENTS, 1);

    assert_eq!(parser.invalid_tokens(), ["-x"]);
    assert!(parser.is_invalid());
    // The rest of the walk still completed.
    assert!(parser.is_option_set("-b"));
    assert_eq!(parser.non_options(), ["file.bin"]);
}

#[test]
fn test_positional_count_mismatch_alone_marks_invalid() {
    let argv = ["prog", "-b", "file.bin"];
    let parser = parse_args(&argv, OPTIONS, ARGUMENTS, 2);

    assert!(parser.invalid_tokens().is_empty());
    assert!(parser.is_invalid());
    assert_eq!(parser.non_option_count(), 1);
    assert_eq!(parser.expected_non_option_count(), 2);
}

#[test]
fn test_positionals_keep_appearance_order() {
    let argv = ["prog", "first", "-b", "second", "-o", "out.txt", "third"];
    let parser = parse_args(&argv, OPTIONS, ARGUMENTS, 3);

    assert_eq!(parser.non_options(), ["first", "second", "third"]);
    assert!(!parser.is_invalid());
}

#[test]
fn test_value_can_be_set_and_queried_under_different_aliases() {
    let argv = ["prog", "--output", "out.txt"];
    let parser = parse_args(&argv, OPTIONS, ARGUMENTS, 0);

    assert_eq!(parser.argument_value("-o"), "out.txt");
    assert_eq!(parser.argument_value("--output"), "out.txt");
}

#[test]
fn test_repeated_value_flag_last_occurrence_wins() {
    let argv = ["prog", "-o", "a.txt", "--output", "b.txt", "-o", "c.txt"];
    let parser = parse_args(&argv, OPTIONS, ARGUMENTS, 0);

    assert_eq!(parser.argument_value("--output"), "c.txt");
    assert!(!parser.is_invalid());
}

#[test]
fn test_unsupplied_argument_reads_as_empty_string() {
    let argv = ["prog"];
    let parser = parse_args(&argv, OPTIONS, ARGUMENTS, 0);

    assert_eq!(parser.argument_value("-o"), "");
    assert!(!parser.is_invalid());
}

#[test]
fn test_value_flag_at_end_of_argv_is_invalid() {
    let argv = ["prog", "-b", "--output"];
    let parser = parse_args(&argv, OPTIONS, ARGUMENTS, 0);

    assert_eq!(parser.invalid_tokens(), ["--output"]);
    assert!(parser.is_invalid());
    assert_eq!(parser.argument_value("--output"), "");
}

#[test]
fn test_empty_specs_accept_only_positionals() {
    let argv = ["prog", "one", "two"];
    let parser = parse_args(&argv, "", "", 2);

    assert!(!parser.is_invalid());
    assert_eq!(parser.non_options(), ["one", "two"]);

    let argv = ["prog", "-x"];
    let parser = parse_args(&argv, "", "", 0);
    assert_eq!(parser.invalid_tokens(), ["-x"]);
}

#[test]
fn test_owned_strings_outlive_source_argv() {
    let parser = {
        let argv: Vec<String> = vec![
            "prog".to_string(),
            "-o".to_string(),
            "out.txt".to_string(),
            "file.bin".to_string(),
        ];
        parse_args(&argv, OPTIONS, ARGUMENTS, 1)
    };

    assert_eq!(parser.argument_value("-o"), "out.txt");
    assert_eq!(parser.non_options(), ["file.bin"]);
}

#[test]
fn test_from_spec_matches_string_grammar_construction() {
    let argv = ["prog", "-b", "-o", "out.txt", "file.bin"];
    let spec = ParserSpec::parse(OPTIONS, ARGUMENTS, 1);

    let from_spec = ArgumentParser::from_spec(&argv, &spec);
    let from_strings = parse_args(&argv, OPTIONS, ARGUMENTS, 1);

    assert_eq!(from_spec.is_invalid(), from_strings.is_invalid());
    assert_eq!(from_spec.non_options(), from_strings.non_options());
    assert_eq!(
        from_spec.argument_value("--output"),
        from_strings.argument_value("--output")
    );
}

#[test]
fn test_multiple_invalid_tokens_keep_encounter_order() {
    let argv = ["prog", "-x", "file.bin", "--bogus", "-o"];
    let parser = parse_args(&argv, OPTIONS, ARGUMENTS, 1);

    assert_eq!(parser.invalid_tokens(), ["-x", "--bogus", "-o"]);
    assert!(parser.is_invalid());
    assert_eq!(parser.non_options(), ["file.bin"]);
}
