use cellblock_core::classify::{classify, extra_rarity_boost, members};
use cellblock_core::rule::RuleTable;
use cellblock_data::{SymmetryMode, WolframClass};
use clap::Parser;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect elementary rules and their rarity", long_about = None)]
struct Args {
    /// Rule index to inspect (0-255)
    #[arg(short, long)]
    rule: Option<i64>,

    /// Print every class with its members instead
    #[arg(short, long, default_value_t = false)]
    classes: bool,

    /// Emit JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct RuleReport {
    rule: u8,
    binary: String,
    class: WolframClass,
    scarcity_percent: u32,
    scarcity_boost_percent: u32,
    mirrored_rarity_boost: u32,
    transitions: Vec<(String, u8)>,
}

fn report(rule: i64) -> anyhow::Result<RuleReport> {
    let table = RuleTable::parse(rule)?;
    let index = table.to_rule_index();
    let classification = classify(index);
    let transitions = (0..8u8)
        .rev()
        .map(|n| {
            let (l, c, r) = ((n >> 2) & 1, (n >> 1) & 1, n & 1);
            (format!("{l}{c}{r}"), table.next_state(l, c, r))
        })
        .collect();
    Ok(RuleReport {
        rule: index,
        binary: table.binary_string(),
        class: classification.wolfram_class,
        scarcity_percent: classification.scarcity_percent,
        scarcity_boost_percent: classification.boost(),
        mirrored_rarity_boost: extra_rarity_boost(
            classification.wolfram_class,
            SymmetryMode::Mirrored,
        ),
        transitions,
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.classes {
        for class in WolframClass::ALL {
            let rules = members(class);
            if args.json {
                println!("{}", serde_json::json!({ "class": class, "members": rules }));
            } else {
                println!("{} ({} rules): {:?}", class, rules.len(), rules);
            }
        }
        return Ok(());
    }

    let rule = args
        .rule
        .ok_or_else(|| anyhow::anyhow!("Pass --rule <n> or --classes"))?;
    let report = report(rule)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Rule {} ({})", report.rule, report.binary);
        for (neighbourhood, next) in &report.transitions {
            println!("  {} -> {}", neighbourhood, next);
        }
        println!("Class: {}", report.class);
        println!(
            "Scarcity: {}% (boost {}%)",
            report.scarcity_percent, report.scarcity_boost_percent
        );
        println!("Mirrored rarity boost: {}", report.mirrored_rarity_boost);
    }

    Ok(())
}
