use printer_render::layout::{column_widths, visible_length};
use printer_render::{
    ColorMap, Colorizer, ConsoleColorizer, DataRow, OutputMode, StencilError, StencilKind,
    Stenciller, TableOptions,
};

struct RedOnly;

impl Colorizer for RedOnly {
    fn colorize(&self, text: &str, color: &str) -> Option<String> {
        (color == "red").then(|| format!("\x1b[31m{}\x1b[0m", text))
    }
}

fn data(pairs: &[(&str, &str)]) -> DataRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn greet_scenario() {
    let mut stenciller = Stenciller::builder().colorizer(RedOnly).build();
    stenciller
        .add_template_stencil("greet", "Hello, {{name}}!", ColorMap::new())
        .unwrap();

    let out = stenciller
        .apply_template_stencil("greet", &data(&[("name", "Ada")]))
        .unwrap();
    assert_eq!(out, "Hello, Ada!");
}

#[test]
fn table_scenario_widths_follow_visible_text() {
    let mut stenciller = Stenciller::builder().colorizer(RedOnly).build();
    stenciller
        .add_table_stencil("t1", ["A", "B"], ["k1", "k2"], data(&[("k2", "red")]))
        .unwrap();

    let table = stenciller
        .apply_table_stencil("t1", &[data(&[("k1", "x"), ("k2", "y")])])
        .unwrap();

    let divider = &table[1];
    assert_eq!(divider.len(), 2);
    assert_eq!(visible_length(&divider[0]), 1);
    assert_eq!(visible_length(&divider[1]), 1);
    assert_eq!(table[2][1], "\x1b[31my\x1b[0m");
}

#[test]
fn divider_matches_header_cell_count_and_widths() {
    let mut stenciller = Stenciller::builder().colorizer(RedOnly).build();
    stenciller
        .add_table_stencil(
            "people",
            ["NAME", "ROLE", "TEAM"],
            ["name", "role", "team"],
            data(&[("role", "red")]),
        )
        .unwrap();

    let rows = [
        data(&[("name", "Grace"), ("role", "admiral"), ("team", "navy")]),
        data(&[("name", "Ada"), ("team", "analytical engine")]),
    ];
    let table = stenciller.apply_table_stencil("people", &rows).unwrap();

    let widths = column_widths(&table);
    assert_eq!(table[1].len(), table[0].len());
    for (cell, width) in table[1].iter().zip(widths) {
        assert_eq!(visible_length(cell), width);
    }
    assert_eq!(table[3], vec!["Ada", "", "analytical engine"]);
}

#[test]
fn headers_shorter_than_columns_are_filled() {
    let mut stenciller = Stenciller::builder().colorizer(RedOnly).build();
    stenciller
        .add_table_stencil("t", ["A"], ["k1", "k2"], data(&[("k2", "red")]))
        .unwrap();

    let table = stenciller
        .apply_table_stencil("t", &[data(&[("k1", "x"), ("k2", "yy")])])
        .unwrap();

    assert_eq!(table[0], vec!["A", ""]);
    assert_eq!(table[1].len(), table[0].len());
    assert_eq!(table[1], vec!["-", "--"]);
}

#[test]
fn field_function_reads_any_key() {
    let mut stenciller = Stenciller::builder().colorizer(RedOnly).build();
    stenciller
        .add_template_stencil(
            "t",
            r#"{{ field("first-name") }} {{ field("last name") }} ({{ field("none") }})"#,
            ColorMap::new(),
        )
        .unwrap();

    let out = stenciller
        .apply_template_stencil(
            "t",
            &data(&[("first-name", "Ada"), ("last name", "Lovelace"), ("none", "N")]),
        )
        .unwrap();
    assert_eq!(out, "Ada Lovelace (N)");
}

#[test]
fn unknown_color_does_not_fail_apply() {
    let mut stenciller = Stenciller::builder()
        .colorizer(ConsoleColorizer::new(OutputMode::Term))
        .build();
    stenciller
        .add_template_stencil("t", "{{ a }}|{{ b }}", data(&[("a", "not-a-color"), ("b", "red")]))
        .unwrap();

    let out = stenciller
        .apply_template_stencil("t", &data(&[("a", "plain"), ("b", "hot")]))
        .unwrap();
    assert!(out.starts_with("plain|"));
    assert!(out.contains("\x1b["));
    assert_eq!(visible_length(&out), "plain|hot".len());
}

#[test]
fn registration_errors() {
    let mut stenciller = Stenciller::new();
    stenciller
        .add_template_stencil("dup", "x", ColorMap::new())
        .unwrap();

    let err = stenciller
        .add_template_stencil("dup", "y", ColorMap::new())
        .unwrap_err();
    assert!(matches!(
        err,
        StencilError::DuplicateId {
            kind: StencilKind::Template,
            ..
        }
    ));
    assert_eq!(stenciller.registry().template_count(), 1);

    let err = stenciller
        .add_template_stencil("", "y", ColorMap::new())
        .unwrap_err();
    assert!(matches!(err, StencilError::EmptyId { .. }));

    // Separate namespace: a table may reuse the id.
    stenciller
        .add_table_stencil("dup", ["H"], ["k"], ColorMap::new())
        .unwrap();
    assert_eq!(stenciller.registry().table_count(), 1);
}

#[test]
fn render_table_in_text_mode() {
    let mut stenciller = Stenciller::builder()
        .output_mode(OutputMode::Text)
        .table_options(TableOptions::default().padding(2).divider_char('='))
        .build();
    stenciller
        .add_table_stencil(
            "langs",
            ["LANGUAGE", "YEAR"],
            ["lang", "year"],
            data(&[("lang", "cyan")]),
        )
        .unwrap();

    let lines = stenciller
        .render_table_stencil(
            "langs",
            &[
                data(&[("lang", "Rust"), ("year", "2015")]),
                data(&[("lang", "OCaml"), ("year", "1996")]),
            ],
        )
        .unwrap();

    assert_eq!(
        lines,
        vec![
            "LANGUAGE  YEAR",
            "========  ====",
            "Rust      2015",
            "OCaml     1996",
        ]
    );
}

#[test]
fn find_returns_registered_record() {
    let mut stenciller = Stenciller::new();
    let colors = data(&[("name", "blue")]);
    stenciller
        .add_template_stencil("greet", "Hi {{ name }}", colors.clone())
        .unwrap();

    let stencil = stenciller.find_template_stencil("greet").unwrap();
    assert_eq!(stencil.template(), "Hi {{ name }}");
    assert_eq!(stencil.colors(), &colors);
    assert!(stenciller.find_table_stencil("greet").is_err());
}
