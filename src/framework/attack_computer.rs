use super::{Attack, AttackKind, AttackSet};
use crate::{arguments::ArgumentSet, kb::RuleBase};
use log::info;

/// Computes the attacks between the arguments built from a rule base.
///
/// An argument `A` attacks an argument `B` on its sub-argument `B'` (possibly `B` itself) if:
/// * `B'` uses at least one defeasible rule and `A` concludes the complement of the conclusion of `B'` (rebut), or
/// * the top rule of `B'` is defeasible and `A` concludes the complement of one of its undercutters (undercut).
///
/// Rebuttals are unrestricted: the top rule of `B'` may be strict, as long as `B'` is not a strict argument.
/// Strict arguments are never attacked.
pub struct AttackComputer<'a> {
    rule_base: &'a RuleBase,
    arguments: &'a ArgumentSet,
}

impl<'a> AttackComputer<'a> {
    /// Builds a new attack computer.
    pub fn new(rule_base: &'a RuleBase, arguments: &'a ArgumentSet) -> Self {
        AttackComputer {
            rule_base,
            arguments,
        }
    }

    /// Computes the attacks.
    ///
    /// Attacks are ordered by target, then by attacked sub-argument, then by kind and attacker.
    pub fn compute(&self) -> AttackSet {
        let mut attacks = AttackSet::new(self.arguments.len());
        for target in self.arguments.iter() {
            for sub_id in target.sub_arguments() {
                let sub = self.arguments.get_argument(*sub_id);
                if sub.is_strict() {
                    continue;
                }
                if let Some(complement) = self.rule_base.complement_id(sub.conclusion()) {
                    for attacker in self.arguments.arguments_concluding(complement) {
                        attacks.new_attack(Attack::new(
                            *attacker,
                            target.id(),
                            *sub_id,
                            AttackKind::Rebut,
                        ));
                    }
                }
                for undercutting in self.rule_base.undercutting_ids(sub.top_rule()) {
                    for attacker in self.arguments.arguments_concluding(*undercutting) {
                        attacks.new_attack(Attack::new(
                            *attacker,
                            target.id(),
                            *sub_id,
                            AttackKind::Undercut,
                        ));
                    }
                }
            }
        }
        info!("found {} attack(s)", attacks.len());
        attacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        arguments::ArgumentConstructor,
        kb::{Literal, Rule},
    };

    fn lit(s: &str) -> Literal {
        s.parse().unwrap()
    }

    fn str_attacks(rb: &RuleBase, args: &ArgumentSet, attacks: &AttackSet) -> Vec<String> {
        let concl = |a: usize| rb.literal(args.get_argument(a).conclusion()).to_string();
        attacks
            .iter()
            .map(|a| {
                format!(
                    "{} {} {}@{}",
                    concl(a.attacker()),
                    a.kind(),
                    concl(a.target()),
                    concl(a.sub_argument())
                )
            })
            .collect()
    }

    #[test]
    fn test_rebut_on_sub_argument() {
        let rb = RuleBase::build(
            vec![
                Rule::strict(vec![], lit("a")),
                Rule::defeasible(vec![lit("a")], lit("b")),
                Rule::strict(vec![lit("b")], lit("c")),
                Rule::strict(vec![], lit("-b")),
            ],
            vec![],
        )
        .unwrap();
        let args = ArgumentConstructor::new(&rb).construct().unwrap();
        let attacks = AttackComputer::new(&rb, &args).compute();
        let mut str_att = str_attacks(&rb, &args, &attacks);
        str_att.sort_unstable();
        assert_eq!(vec!["-b rebut b@b", "-b rebut c@b"], str_att);
    }

    #[test]
    fn test_unrestricted_rebut() {
        let rb = RuleBase::build(
            vec![
                Rule::defeasible(vec![], lit("a")),
                Rule::strict(vec![lit("a")], lit("c")),
                Rule::strict(vec![], lit("-c")),
            ],
            vec![],
        )
        .unwrap();
        let args = ArgumentConstructor::new(&rb).construct().unwrap();
        let attacks = AttackComputer::new(&rb, &args).compute();
        assert_eq!(vec!["-c rebut c@c"], str_attacks(&rb, &args, &attacks));
    }

    #[test]
    fn test_strict_arguments_are_not_attacked() {
        let rb = RuleBase::build(
            vec![
                Rule::strict(vec![], lit("a")),
                Rule::strict(vec![], lit("-a")),
                Rule::defeasible(vec![], lit("b")),
                Rule::strict(vec![lit("b")], lit("-a")),
            ],
            vec![],
        )
        .unwrap();
        let args = ArgumentConstructor::new(&rb).construct().unwrap();
        let attacks = AttackComputer::new(&rb, &args).compute();
        let mut str_att = str_attacks(&rb, &args, &attacks);
        str_att.sort_unstable();
        assert_eq!(vec!["a rebut -a@-a"], str_att);
        for attack in attacks.iter() {
            assert!(!args.get_argument(attack.sub_argument()).is_strict());
        }
    }

    #[test]
    fn test_undercut() {
        let rb = RuleBase::build(
            vec![
                Rule::strict(vec![], lit("a")),
                Rule::defeasible(vec![lit("a")], lit("b")).with_undercutters(vec![lit("u")]),
                Rule::strict(vec![lit("b")], lit("c")),
                Rule::strict(vec![], lit("-u")),
            ],
            vec![],
        )
        .unwrap();
        let args = ArgumentConstructor::new(&rb).construct().unwrap();
        let attacks = AttackComputer::new(&rb, &args).compute();
        let mut str_att = str_attacks(&rb, &args, &attacks);
        str_att.sort_unstable();
        assert_eq!(vec!["-u undercut b@b", "-u undercut c@b"], str_att);
    }

    #[test]
    fn test_attack_on_own_sub_argument() {
        let rb = RuleBase::build(
            vec![
                Rule::defeasible(vec![], lit("p")),
                Rule::defeasible(vec![lit("p")], lit("q")),
                Rule::strict(vec![lit("q")], lit("-p")),
            ],
            vec![],
        )
        .unwrap();
        let args = ArgumentConstructor::new(&rb).construct().unwrap();
        let attacks = AttackComputer::new(&rb, &args).compute();
        let mut str_att = str_attacks(&rb, &args, &attacks);
        str_att.sort_unstable();
        assert_eq!(
            vec![
                "-p rebut -p@p",
                "-p rebut p@p",
                "-p rebut q@p",
                "p rebut -p@-p"
            ],
            str_att
        );
    }
}
