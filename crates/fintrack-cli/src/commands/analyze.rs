//! Message analysis command

use anyhow::Result;
use fintrack_core::classify_message;
use fintrack_core::models::RiskLabel;

pub fn cmd_analyze(message: &str, locale: &str, channel: &str, json: bool) -> Result<()> {
    let result = classify_message(message, Some(locale), Some(channel));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!("🛡️  Message Risk Analysis");
    println!("   ─────────────────────────────");
    println!(
        "   {} {} (score {:.2})",
        risk_icon(result.label),
        result.label,
        result.risk_score
    );

    if result.tactics_detected.is_empty() {
        println!("   No manipulation tactics detected");
    } else {
        let tactics: Vec<&str> = result.tactics_detected.iter().map(|t| t.as_str()).collect();
        println!("   Tactics: {}", tactics.join(", "));
    }

    println!();
    println!("   {}", result.rationale);
    println!("   👉 {}", result.recommendation);

    Ok(())
}

fn risk_icon(label: RiskLabel) -> &'static str {
    match label {
        RiskLabel::Manipulative => "🚨",
        RiskLabel::Uncertain => "⚠️ ",
        RiskLabel::Legitimate => "✅",
    }
}
