use combination::{
    generate, parse_set_line, parse_sets, parse_sets_str, run, sets_to_string, to_string,
    to_string_with_options, Combination, Element, Error, FormatOptions, Set, Style,
};
use std::io::Cursor;

fn row(pairs: &[(&str, &str)]) -> Combination {
    Combination::new(pairs.iter().map(|(n, v)| Element::new(*n, *v)).collect())
}

#[test]
fn test_quote_edge_cases() {
    assert_eq!(parse_set_line(r#"name: "a b" c"#).unwrap().values, vec!["a b", "c"]);
    assert_eq!(parse_set_line(r#"name: "a\"b" c"#).unwrap().values, vec!["a\"b", "c"]);
    assert!(matches!(
        parse_set_line(r#"name: "unterminated"#),
        Err(Error::NoClosingQuote { .. })
    ));
}

#[test]
fn test_empty_name() {
    assert_eq!(parse_set_line(": a b"), Err(Error::InvalidName { line: 1 }));
}

#[test]
fn test_empty_values_parse_but_do_not_generate() {
    let set = parse_set_line("name:").unwrap();
    assert_eq!(set, Set::new("name", Vec::<String>::new()));
    assert_eq!(generate(vec![set]), Err(Error::NoValues { name: "name".into() }));
}

#[test]
fn test_parse_sets_card_figure() {
    let input = "card: \"Heart Rouge\" \"Tile Rouge\" \"Clover Noir\" \"Pike Noir\"\n\
                 figure: Jack Queen King";
    let sets = parse_sets(Cursor::new(input)).unwrap();
    assert_eq!(
        sets,
        vec![
            Set::new("card", ["Heart Rouge", "Tile Rouge", "Clover Noir", "Pike Noir"]),
            Set::new("figure", ["Jack", "Queen", "King"]),
        ]
    );
}

#[test]
fn test_parse_sets_escaped_newlines() {
    let input = concat!(
        r#"card: "\"Heart\nRouge\"" "Tile Rouge" "Clover\nNoir" "Pike Noir""#,
        "\nfigure: Jack Queen King"
    );
    let sets = parse_sets_str(input).unwrap();
    assert_eq!(
        sets[0].values,
        vec!["\"Heart\nRouge\"", "Tile Rouge", "Clover\nNoir", "Pike Noir"]
    );
}

#[test]
fn test_parse_sets_empty_set_line() {
    let sets = parse_sets_str("card:\nfigure: Jack Queen King").unwrap();
    assert_eq!(sets[0], Set::new("card", Vec::<String>::new()));
    assert_eq!(sets[1].len(), 3);
}

#[test]
fn test_ordering_scenario() {
    let sets = vec![
        Set::new("S1", ["X", "Y"]),
        Set::new("S2", ["µ", "v"]),
        Set::new("I3", ["0xEDEA", "42", "0"]),
    ];
    let combos = generate(sets).unwrap();
    assert_eq!(combos.len(), 12);

    let expected = [
        ("X", "µ", "0xEDEA"),
        ("X", "µ", "42"),
        ("X", "µ", "0"),
        ("X", "v", "0xEDEA"),
        ("X", "v", "42"),
        ("X", "v", "0"),
        ("Y", "µ", "0xEDEA"),
        ("Y", "µ", "42"),
        ("Y", "µ", "0"),
        ("Y", "v", "0xEDEA"),
        ("Y", "v", "42"),
        ("Y", "v", "0"),
    ];
    let actual: Vec<Combination> = combos.iter().collect();
    let expected: Vec<Combination> = expected
        .iter()
        .map(|&(a, b, c)| row(&[("S1", a), ("S2", b), ("I3", c)]))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_single_set_scenario() {
    let combos = generate(vec![Set::new("F1", ["X", "Y"])]).unwrap();
    assert_eq!(combos.to_vec(), vec![row(&[("F1", "X")]), row(&[("F1", "Y")])]);
}

#[test]
fn test_zero_value_rejection_scenario() {
    let sets = parse_sets_str("x: 0 1 2\ny:\nz: 3 4 5").unwrap();
    assert_eq!(generate(sets), Err(Error::NoValues { name: "y".into() }));
}

#[test]
fn test_literal_output_matches_documented_table() {
    let input = "card: \"Heart Red\" Tile Clover \"Pike Black\"\nfigure: Jack Queen King";
    let combos = generate(parse_sets_str(input).unwrap()).unwrap();
    let options = FormatOptions::new().with_quoted_values(true);
    let output = to_string_with_options(&combos, &options).unwrap();
    let expected = r#"{card: "Heart Red", figure: "Jack"},
{card: "Heart Red", figure: "Queen"},
{card: "Heart Red", figure: "King"},
{card: "Tile", figure: "Jack"},
{card: "Tile", figure: "Queen"},
{card: "Tile", figure: "King"},
{card: "Clover", figure: "Jack"},
{card: "Clover", figure: "Queen"},
{card: "Clover", figure: "King"},
{card: "Pike Black", figure: "Jack"},
{card: "Pike Black", figure: "Queen"},
{card: "Pike Black", figure: "King"},
"#;
    assert_eq!(output, expected);
}

#[test]
fn test_raw_values_as_written() {
    let combos = generate(vec![Set::new("F1", [r#""X""#, r#""Y""#])]).unwrap();
    assert_eq!(to_string(&combos).unwrap(), "{F1: \"X\"},\n{F1: \"Y\"},\n");
}

#[test]
fn test_json_lines_output() {
    let combos = generate(parse_sets_str("a: 1 2\nb: x").unwrap()).unwrap();
    let options = FormatOptions::new().with_style(Style::JsonLines);
    let output = to_string_with_options(&combos, &options).unwrap();
    let rows: Vec<serde_json::Value> = output
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], serde_json::json!({"a": "1", "b": "x"}));
    assert_eq!(rows[1], serde_json::json!({"a": "2", "b": "x"}));
}

#[test]
fn test_serialized_sets_parse_back() {
    let sets = vec![
        Set::new("card", ["Heart Red", "say \"hi\"", "back\\slash", ""]),
        Set::new("empty", Vec::<String>::new()),
        Set::new("figure", ["Jack"]),
    ];
    let text = sets_to_string(&sets).unwrap();
    assert_eq!(parse_sets_str(&text).unwrap(), sets);
}

#[test]
fn test_run_end_to_end() {
    let mut out = Vec::new();
    let rows = run(Cursor::new("a: 1 2\nb: 3 4"), &mut out, &FormatOptions::new()).unwrap();
    assert_eq!(rows, 4);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{a: 1, b: 3},\n{a: 1, b: 4},\n{a: 2, b: 3},\n{a: 2, b: 4},\n"
    );
}

#[test]
fn test_zero_sets_is_one_empty_row() {
    let combos = generate(parse_sets_str("").unwrap()).unwrap();
    assert_eq!(combos.len(), 1);
    assert_eq!(to_string(&combos).unwrap(), "{},\n");
}
