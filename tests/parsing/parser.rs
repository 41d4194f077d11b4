#[cfg(test)]
mod verify {
    use css_abbreviation::language::*;
    use css_abbreviation::parsing::{self, Parser};

    /// Flatten a tree into `name(0 => a, 1 => b): value;` form, one
    /// property after another.
    fn stringify(abbreviation: &Abbreviation) -> String {
        abbreviation
            .properties
            .iter()
            .map(|property| {
                let mut result = property
                    .name
                    .unwrap_or("")
                    .to_string();

                if !property
                    .attributes
                    .is_empty()
                {
                    let attributes: Vec<String> = property
                        .attributes
                        .iter()
                        .map(|attribute| format!("{} => {}", attribute.name, attribute.text()))
                        .collect();
                    result.push_str(&format!("({})", attributes.join(", ")));
                }

                if !property
                    .value
                    .is_empty()
                {
                    result.push_str(&format!(": {}", property.value));
                }

                result.push(';');
                result
            })
            .collect()
    }

    fn parse(content: &str) -> String {
        let abbreviation = parsing::parse(content)
            .unwrap_or_else(|e| panic!("failed to parse '{}': {:?}", content, e));
        stringify(&abbreviation)
    }

    #[test]
    fn numeric_units() {
        assert_eq!(parse("p10"), "p: 10;");
        assert_eq!(parse("p-10"), "p: -10;");
        assert_eq!(parse("p-10-"), "p: -10;");
        assert_eq!(parse("p-10-20"), "p: -10 20;");
        assert_eq!(parse("p-10--20"), "p: -10 -20;");
        assert_eq!(parse("p-10-20--30"), "p: -10 20 -30;");
        assert_eq!(parse("p-10p-20--30"), "p: -10p -20 -30;");
        assert_eq!(parse("p-10%-20--30"), "p: -10% -20 -30;");

        assert_eq!(parse("p.5"), "p: 0.5;");
        assert_eq!(parse("p-.5"), "p: -0.5;");
        assert_eq!(parse("p.1.2.3"), "p: 0.1 0.2 0.3;");
        assert_eq!(parse("p.1-.2.3"), "p: 0.1 0.2 0.3;");
        assert_eq!(parse("p.1--.2.3"), "p: 0.1 -0.2 0.3;");
        assert_eq!(parse("p-0"), "p: 0;");
        assert_eq!(parse("w100em"), "w: 100em;");
    }

    #[test]
    fn color() {
        assert_eq!(parse("c#"), "c: #000000;");
        assert_eq!(parse("c#1"), "c: #111111;");
        assert_eq!(parse("c#f"), "c: #ffffff;");
        assert_eq!(parse("c#a#b#c"), "c: #aaaaaa #bbbbbb #cccccc;");
        assert_eq!(parse("c#af"), "c: #afafaf;");
        assert_eq!(parse("c#fc0"), "c: #ffcc00;");
        assert_eq!(parse("c#11.5"), "c: rgba(17, 17, 17, 0.5);");
        assert_eq!(parse("c#.99"), "c: rgba(0, 0, 0, 0.99);");
        assert_eq!(parse("c#t"), "c: transparent;");
    }

    #[test]
    fn keywords() {
        assert_eq!(parse("m:a"), "m: a;");
        assert_eq!(parse("m-a"), "m: a;");
        assert_eq!(parse("m-abc"), "m: abc;");
        assert_eq!(parse("m-a0"), "m: a 0;");
        assert_eq!(parse("m-a0-a"), "m: a 0 a;");
    }

    #[test]
    fn variables() {
        assert_eq!(parse("c$primary"), "c: $primary;");
        assert_eq!(parse("m$gutter2-10"), "m: $gutter2 -10;");
        assert_eq!(parse("c@brand#fff"), "c: @brand #ffffff;");
    }

    #[test]
    fn arguments() {
        let abbreviation = parsing::parse(r#"lg(top, "red, black", rgb(0, 0, 0) 10%)"#).unwrap();
        let g = abbreviation
            .first_child()
            .unwrap();
        assert_eq!(g.name, Some("lg"));
        assert_eq!(
            g.attributes
                .len(),
            3
        );

        let attribute = &g.attributes[0];
        assert_eq!(attribute.name, "0");
        assert_eq!(
            attribute
                .value
                .values(),
            &[Value::Keyword("top")]
        );

        let attribute = &g.attributes[1];
        assert_eq!(attribute.name, "1");
        assert_eq!(
            attribute
                .value
                .values(),
            &[Value::String(r#""red, black""#)]
        );

        let attribute = &g.attributes[2];
        assert_eq!(attribute.name, "2");
        assert_eq!(
            attribute
                .value
                .len(),
            2
        );
        assert_eq!(attribute.text(), "rgb(0, 0, 0) 10%");

        match &attribute
            .value
            .values()[0]
        {
            Value::Function(function) => {
                assert_eq!(function.name, "rgb");
                assert_eq!(
                    function
                        .arguments
                        .len(),
                    3
                );
                assert_eq!(
                    function.arguments[0].values(),
                    &[Value::Numeric(Numeric::new(0.0, ""))]
                );
            }
            other => panic!("expected a function call, got {:?}", other),
        }
    }

    #[test]
    fn arguments_with_values() {
        assert_eq!(parse("bd1-s(a, b)"), "bd(0 => a, 1 => b): 1 s;");
        assert_eq!(parse("f()"), "f;");
        assert_eq!(parse("f( x ,y )!"), "f(0 => x, 1 => y): !;");
        assert_eq!(parse("f(a,)"), "f(0 => a, 1 => );");
    }

    #[test]
    fn important() {
        assert_eq!(parse("!"), "!;");
        assert_eq!(parse("p!"), "p: !;");
        assert_eq!(parse("p10!"), "p: 10 !;");
    }

    #[test]
    fn mixed() {
        assert_eq!(parse("bd1-s#fc0"), "bd: 1 s #ffcc00;");
        assert_eq!(parse("bd#fc0-1"), "bd: #ffcc00 1;");
        assert_eq!(parse("p0+m0"), "p: 0;m: 0;");
        assert_eq!(parse("p0!+m0!"), "p: 0 !;m: 0 !;");
    }

    #[test]
    fn unnamed_and_empty() {
        assert_eq!(parse(""), "");
        assert_eq!(parse("#fc0"), ": #ffcc00;");

        let abbreviation = parsing::parse("10").unwrap();
        assert_eq!(
            abbreviation
                .first_child()
                .map(|property| property.name),
            Some(None)
        );
    }

    #[test]
    fn declarations_in_order() {
        let abbreviation = parsing::parse("p0+m0").unwrap();
        let names: Vec<Option<&str>> = abbreviation
            .properties
            .iter()
            .map(|property| property.name)
            .collect();
        assert_eq!(names, vec![Some("p"), Some("m")]);
    }

    #[test]
    fn typed_values() {
        let abbreviation = parsing::parse("bd1-s#fc0!").unwrap();
        let property = abbreviation
            .first_child()
            .unwrap();

        assert_eq!(
            property
                .value
                .len(),
            4
        );
        assert_eq!(
            property
                .value
                .values()[0],
            Value::Numeric(Numeric::new(1.0, ""))
        );
        assert_eq!(
            property
                .value
                .values()[1],
            Value::Keyword("s")
        );
        assert!(matches!(
            property
                .value
                .values()[2],
            Value::Color(Color {
                r: 255,
                g: 204,
                b: 0,
                ..
            })
        ));
        assert_eq!(
            property
                .value
                .values()[3],
            Value::Important
        );
    }

    #[test]
    fn reading_properties_incrementally() {
        let mut input = Parser::new();
        input.initialize("p10+m5");

        let first = input
            .read_property()
            .unwrap();
        assert_eq!(first.name, Some("p"));
        assert_eq!(
            first
                .value
                .to_string(),
            "10"
        );
        assert_eq!(input.offset(), 3);
    }

    #[test]
    fn tree_collaborator() {
        #[derive(Default)]
        struct Names(Vec<String>);

        impl<'i> Tree<'i> for Names {
            fn append_child(&mut self, property: Property<'i>) {
                self.0
                    .push(format!("{}={}", property.name.unwrap_or("?"), property.value));
            }
        }

        let mut names = Names::default();
        let count = parsing::parse_into("p10+m5-a", &mut names).unwrap();
        assert_eq!(count, 2);
        assert_eq!(names.0, vec!["p=10", "m=5 a"]);

        let mut names = Names::default();
        assert!(parsing::parse_into("p10+m5?", &mut names).is_err());
        assert!(names
            .0
            .is_empty());
    }
}
