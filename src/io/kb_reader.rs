use super::{warning_result::WarningResult, KnowledgeBaseReader, WarningHandler};
use crate::kb::{Literal, Preference, Rule, RuleKind};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{BufRead, BufReader, Read};

const NAME_PATTERN: &str = r"[_[:alpha:]][_[:alpha:]\d]*";

lazy_static! {
    static ref RULE_LINE_PATTERN: Regex = Regex::new(r"-->|==>|=\(.*\)=>").unwrap();
    static ref RULE_LINE_PARTS_PATTERN: Regex = Regex::new(&format!(
        r"^\s*(?:({})\s*:)?(.*?)(-->|==>|=\((.*)\)=>)(.*)$",
        NAME_PATTERN
    ))
    .unwrap();
    static ref PREFERENCE_LINE_PATTERN: Regex = Regex::new(r"[<>]").unwrap();
    static ref PREFERENCE_GROUP_PATTERN: Regex =
        Regex::new(&format!(r"^\s*{n}\s*(,\s*{n}\s*)*$", n = NAME_PATTERN)).unwrap();
    static ref LITERAL_PATTERN: Regex = Regex::new(r"^-?[[:alpha:]][_[:alpha:]\d]*$").unwrap();
}

fn read_literal(s: &str) -> Result<Literal> {
    let trimmed = s.trim();
    if !LITERAL_PATTERN.is_match(trimmed) {
        return Err(anyhow!(r#"invalid literal "{}""#, trimmed));
    }
    trimmed.parse::<Literal>().map_err(|e| anyhow!(e))
}

fn read_literal_list(s: &str, list_kind: &str) -> Result<WarningResult<Vec<Literal>, String>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(WarningResult::Ok(vec![]));
    }
    let literals = trimmed
        .split(',')
        .map(read_literal)
        .collect::<Result<Vec<Literal>>>()
        .with_context(|| format!("while reading the {}", list_kind))?;
    let mut warnings = vec![];
    for (i, l) in literals.iter().enumerate() {
        if literals[..i].contains(l) && !literals[i + 1..].contains(l) {
            warnings.push(format!("literal {} is repeated in the {}", l, list_kind));
        }
    }
    Ok(WarningResult::new(literals, warnings))
}

fn strip_brackets(s: &str) -> Result<&str> {
    let trimmed = s.trim();
    match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
        (Some(inner), true) => Ok(&inner[..inner.len() - 1]),
        (None, false) => Ok(trimmed),
        _ => Err(anyhow!("unbalanced brackets around the antecedents")),
    }
}

fn try_read_rule_line(l: &str) -> Result<Option<WarningResult<Rule, String>>> {
    if !RULE_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    let captures = RULE_LINE_PARTS_PATTERN
        .captures(l)
        .ok_or_else(|| anyhow!("invalid rule {}", l.trim()))?;
    let antecedents = read_literal_list(strip_brackets(captures.get(2).unwrap().as_str())?, "antecedents")?;
    let consequent = read_literal(captures.get(5).unwrap().as_str()).context("while reading the consequent")?;
    let arrow = captures.get(3).unwrap().as_str();
    let (kind, undercutters) = match captures.get(4) {
        Some(u) => {
            if u.as_str().trim().is_empty() {
                return Err(anyhow!("empty undercutter list in {}", arrow));
            }
            (RuleKind::Defeasible, read_literal_list(u.as_str(), "undercutters")?)
        }
        None if arrow == RuleKind::Strict.arrow() => (RuleKind::Strict, WarningResult::Ok(vec![])),
        None => (RuleKind::Defeasible, WarningResult::Ok(vec![])),
    };
    let name = captures.get(1).map(|n| n.as_str().to_string());
    Ok(Some(antecedents.zip(undercutters).map(|(a, u)| {
        let rule = Rule::new(kind, a, consequent).with_undercutters(u);
        match name {
            Some(n) => rule.with_name(&n),
            None => rule,
        }
    })))
}

fn read_name_group(s: &str) -> Result<Vec<String>> {
    if !PREFERENCE_GROUP_PATTERN.is_match(s) {
        return Err(anyhow!(r#"invalid rule name list "{}""#, s.trim()));
    }
    Ok(s.split(',').map(|n| n.trim().to_string()).collect())
}

fn try_read_preference_line(l: &str) -> Result<Option<WarningResult<Vec<Preference>, String>>> {
    if !PREFERENCE_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    let groups = PREFERENCE_LINE_PATTERN
        .split(l)
        .map(read_name_group)
        .collect::<Result<Vec<Vec<String>>>>()?;
    let separators = PREFERENCE_LINE_PATTERN
        .find_iter(l)
        .map(|m| m.as_str())
        .collect::<Vec<&str>>();
    let mut preferences = vec![];
    for (i, sep) in separators.iter().enumerate() {
        let (weaker, stronger) = if *sep == "<" {
            (&groups[i], &groups[i + 1])
        } else {
            (&groups[i + 1], &groups[i])
        };
        for w in weaker.iter() {
            for s in stronger.iter() {
                preferences.push(Preference::new(w, s));
            }
        }
    }
    let warnings = if separators.windows(2).any(|w| w[0] != w[1]) {
        vec!["preference statement mixes < and >".to_string()]
    } else {
        vec![]
    };
    Ok(Some(WarningResult::new(preferences, warnings)))
}

/// A reader for the textual knowledge base format.
///
/// # Format
///
/// The format is line-oriented.
/// Each line contains at most one statement; `#` starts a comment that ends with the line, and blank lines are ignored.
///
/// * `[a, -b] --> c` is a strict rule; the brackets are optional, and `--> c` is a fact;
/// * `[a, -b] ==> c` is a defeasible rule;
/// * `[a] =(u, v)=> c` is a defeasible rule presuming `u` and `v`, undercut by any argument concluding `-u` or `-v`;
/// * any rule can be named by a prefix like `R1:`;
/// * `R1 < R2` states that the rule named `R2` is strictly preferred to the one named `R1`,
///   `R1, R2 < R3 < R4` states a chain of preferences between groups of rules, and `R2 > R1` is the same as `R1 < R2`.
///
/// Literals are atom names, optionally prefixed by `-` to denote their negation.
/// Atom names begin with a letter and may contain letters, digits and underscores.
///
/// ```text
/// # birds fly, but penguins do not
/// --> bird
/// --> penguin
/// R1: bird ==> flies
/// R2: penguin ==> -flies
/// R1 < R2
/// ```
///
/// # Example
///
/// ```
/// # use scarab::io::{KnowledgeBaseReader, TextKnowledgeBaseReader};
/// # use scarab::kb::RuleBase;
/// fn read_kb_from_str(s: &str) -> RuleBase {
///     let reader = TextKnowledgeBaseReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid knowledge base")
/// }
/// # read_kb_from_str("--> a");
/// ```
#[derive(Default)]
pub struct TextKnowledgeBaseReader {
    warning_handlers: Vec<WarningHandler>,
}

impl KnowledgeBaseReader for TextKnowledgeBaseReader {
    fn read_statements(&self, reader: &mut dyn Read) -> Result<(Vec<Rule>, Vec<Preference>)> {
        let mut rules = vec![];
        let mut preferences = vec![];
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line {}", 1 + i);
            let warning_consumer = |warnings: Vec<String>| {
                for w in warnings.iter() {
                    self.warning_handlers
                        .iter()
                        .for_each(|h| (h)(1 + i, w.to_string()));
                }
            };
            let full_line = line.with_context(context)?;
            let l = match full_line.find('#') {
                Some(index) => &full_line[..index],
                None => full_line.as_str(),
            };
            if l.trim().is_empty() {
                continue;
            }
            if let Some(r) = try_read_rule_line(l).with_context(context)? {
                rules.push(r.consume_warnings(warning_consumer));
                continue;
            }
            if let Some(p) = try_read_preference_line(l).with_context(context)? {
                preferences.append(&mut p.consume_warnings(warning_consumer));
                continue;
            }
            return Err(anyhow!(r#"syntax error in line "{}""#, l.trim())).with_context(context);
        }
        Ok((rules, preferences))
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::RuleBase;
    use paste::paste;
    use std::{cell::RefCell, rc::Rc};

    fn lit(s: &str) -> Literal {
        s.parse().unwrap()
    }

    fn read_rule(l: &str) -> Rule {
        try_read_rule_line(l)
            .unwrap()
            .unwrap()
            .consume_warnings(|_| {})
    }

    macro_rules! rule_line_tests {
        ($($name:ident: $line:expr => $expected:expr,)*) => {
            $(
                paste! {
                    #[test]
                    fn [<test_read_rule_ $name>]() {
                        assert_eq!($expected, read_rule($line));
                    }
                }
            )*
        };
    }

    rule_line_tests! {
        fact: "--> a" => Rule::strict(vec![], lit("a")),
        fact_empty_brackets: "[] --> a" => Rule::strict(vec![], lit("a")),
        negated_fact: "  -->   -a " => Rule::strict(vec![], lit("-a")),
        strict: "a, -b --> c" => Rule::strict(vec![lit("a"), lit("-b")], lit("c")),
        strict_brackets: "[a,-b]-->c" => Rule::strict(vec![lit("a"), lit("-b")], lit("c")),
        defeasible: "a ==> -c" => Rule::defeasible(vec![lit("a")], lit("-c")),
        defeasible_fact: "==> c" => Rule::defeasible(vec![], lit("c")),
        named: "R1: a ==> c" => Rule::defeasible(vec![lit("a")], lit("c")).with_name("R1"),
        named_no_space: "_r_2:[a]==>c" => Rule::defeasible(vec![lit("a")], lit("c")).with_name("_r_2"),
        undercut: "R1: a =(u, -v)=> c" => Rule::defeasible(vec![lit("a")], lit("c"))
            .with_name("R1")
            .with_undercutters(vec![lit("u"), lit("-v")]),
        undercut_no_antecedent: "=(u)=> c" => Rule::defeasible(vec![], lit("c"))
            .with_undercutters(vec![lit("u")]),
        identifier_chars: "a_1, B2 --> c_3" => Rule::strict(vec![lit("a_1"), lit("B2")], lit("c_3")),
    }

    macro_rules! rule_line_error_tests {
        ($($name:ident: $line:expr,)*) => {
            $(
                paste! {
                    #[test]
                    fn [<test_read_rule_error_ $name>]() {
                        assert!(try_read_rule_line($line).is_err());
                    }
                }
            )*
        };
    }

    rule_line_error_tests! {
        no_consequent: "a -->",
        two_consequents: "a --> b, c",
        empty_antecedent: "a, , b --> c",
        trailing_comma: "a, --> c",
        double_negation: "--a --> c",
        digit_first: "1a --> c",
        unbalanced_left: "[a --> c",
        unbalanced_right: "a] --> c",
        empty_undercutters: "a =()=> c",
        invalid_name: "1R: a ==> c",
        invalid_undercutter: "a =(u v)=> c",
    }

    #[test]
    fn test_not_a_rule_line() {
        assert!(try_read_rule_line("R1 < R2").unwrap().is_none());
        assert!(try_read_rule_line("a -> b").unwrap().is_none());
    }

    #[test]
    fn test_repeated_antecedent_warning() {
        let mut warnings = vec![];
        let rule = try_read_rule_line("a, a, b ==> c")
            .unwrap()
            .unwrap()
            .consume_warnings(|w| warnings = w);
        assert_eq!(3, rule.antecedents().len());
        assert_eq!(
            vec!["literal a is repeated in the antecedents".to_string()],
            warnings
        );
    }

    #[test]
    fn test_repeated_undercutter_warning() {
        let mut warnings = vec![];
        let rule = try_read_rule_line("a =(u, u, u)=> c")
            .unwrap()
            .unwrap()
            .consume_warnings(|w| warnings = w);
        assert_eq!(1, rule.undercutters().len());
        assert_eq!(
            vec!["literal u is repeated in the undercutters".to_string()],
            warnings
        );
    }

    fn read_preferences(l: &str) -> Vec<String> {
        try_read_preference_line(l)
            .unwrap()
            .unwrap()
            .consume_warnings(|_| {})
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn test_read_preferences() {
        assert_eq!(vec!["R1 < R2"], read_preferences("R1 < R2"));
        assert_eq!(vec!["R1 < R2"], read_preferences(" R2>R1 "));
        assert_eq!(
            vec!["R1 < R3", "R2 < R3", "R3 < R4"],
            read_preferences("R1, R2 < R3 < R4")
        );
        assert_eq!(
            vec!["R2 < R1", "R3 < R1"],
            read_preferences("R1 > R2, R3")
        );
    }

    #[test]
    fn test_mixed_preference_warning() {
        let mut warnings = vec![];
        let prefs = try_read_preference_line("R1 < R2 > R3")
            .unwrap()
            .unwrap()
            .consume_warnings(|w| warnings = w);
        assert_eq!(vec![Preference::new("R1", "R2"), Preference::new("R3", "R2")], prefs);
        assert_eq!(1, warnings.len());
    }

    #[test]
    fn test_read_preferences_errors() {
        ["R1 <", "< R2", "R1 << R2", "R1, < R2", "R1 R2 < R3", "1R < R2"]
            .iter()
            .for_each(|l| assert!(try_read_preference_line(l).is_err(), "{}", l));
    }

    #[test]
    fn test_read_ok() {
        let instance = "# a comment\n--> a # another one\n\nR1: a ==> b\nR2: a ==> -b\nR2 < R1\n";
        let rb = TextKnowledgeBaseReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!(3, rb.n_rules());
        assert_eq!(1, rb.preferences().len());
        let r1 = rb.rule_id("R1").unwrap();
        let r2 = rb.rule_id("R2").unwrap();
        assert!(rb.preference_graph().is_strictly_preferred(r1, r2));
    }

    #[test]
    fn test_read_empty() {
        let rb = TextKnowledgeBaseReader::default()
            .read(&mut "\n  \n# nothing\n".as_bytes())
            .unwrap();
        assert_eq!(0, rb.n_rules());
    }

    #[test]
    fn test_syntax_error_line_number() {
        let instance = "--> a\n\nfoo bar\n";
        let err = TextKnowledgeBaseReader::default()
            .read(&mut instance.as_bytes())
            .unwrap_err();
        assert_eq!("while reading line 3", err.to_string());
        assert!(format!("{:#}", err).contains("syntax error"));
    }

    #[test]
    fn test_validation_error() {
        let instance = "R1: --> a\nR1: a ==> b\n";
        let err = TextKnowledgeBaseReader::default()
            .read(&mut instance.as_bytes())
            .unwrap_err();
        assert!(format!("{:#}", err).contains(r#"rule name "R1" is used more than once"#));
    }

    #[test]
    fn test_read_statements_does_not_validate() {
        let instance = "R1 < R2\n";
        let (rules, preferences) = TextKnowledgeBaseReader::default()
            .read_statements(&mut instance.as_bytes())
            .unwrap();
        assert!(rules.is_empty());
        assert_eq!(1, preferences.len());
        assert!(RuleBase::build(rules, preferences).is_err());
    }

    #[test]
    fn test_warning_handlers() {
        let warnings = Rc::new(RefCell::new(Vec::<(usize, String)>::new()));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = TextKnowledgeBaseReader::default();
        reader.add_warning_handler(Box::new(move |line: usize, w: String| {
            warnings_clone.borrow_mut().push((line, w))
        }));
        let instance = "--> a\na, a ==> b\n";
        reader.read(&mut instance.as_bytes()).unwrap();
        assert_eq!(
            vec![(2, "literal a is repeated in the antecedents".to_string())],
            *warnings.borrow()
        );
    }
}
