use goolabs_client::Capability;
use goolabs_telemetry::{read_jsonl, CallOutcome, CallRecord, Paths};
use std::collections::BTreeMap;

fn compute_stats(calls: &[CallRecord]) -> String {
    if calls.is_empty() {
        return "No calls to analyze.".to_string();
    }
    let total = calls.len();
    let succeeded = calls.iter().filter(|c| c.is_ok()).count();
    let avg_ms = calls.iter().map(|c| c.duration_ms).sum::<u64>() as f64 / total as f64;

    let mut per_method: BTreeMap<&str, usize> = BTreeMap::new();
    let mut failures: BTreeMap<String, usize> = BTreeMap::new();
    for call in calls {
        *per_method.entry(call.method.as_str()).or_default() += 1;
        if call.outcome != CallOutcome::Ok {
            let kind = serde_json::to_value(call.outcome)
                .ok()
                .and_then(|v| v.as_str().map(String::from))
                .unwrap_or_default();
            *failures.entry(kind).or_default() += 1;
        }
    }

    let mut out = format!(
        "Total calls: {}\n\
         Succeeded: {} ({:.0}%)\n\
         Avg duration: {:.0} ms",
        total,
        succeeded,
        succeeded as f64 / total as f64 * 100.0,
        avg_ms
    );
    for (kind, count) in &failures {
        out.push_str(&format!("\nFailed ({kind}): {count}"));
    }
    out.push_str("\nBy method:");
    for (method, count) in &per_method {
        out.push_str(&format!("\n  {method}: {count}"));
    }
    out.push_str("\nBy endpoint:");
    for capability in Capability::ALL {
        let endpoint = capability.endpoint();
        let count = calls.iter().filter(|c| c.capability == endpoint).count();
        if count > 0 {
            out.push_str(&format!("\n  {endpoint}: {count}"));
        }
    }
    out
}

fn format_call(call: &CallRecord) -> String {
    let status = match &call.error {
        Some(error) => format!("failed: {error}"),
        None => "ok".to_string(),
    };
    format!(
        "  {} | {} ({}) {}ms | {}",
        call.timestamp.format("%Y-%m-%d %H:%M"),
        call.method,
        call.capability,
        call.duration_ms,
        status
    )
}

pub fn run(stats: bool, limit: usize) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let calls: Vec<CallRecord> = read_jsonl(&paths.calls_file())?;

    if calls.is_empty() {
        println!("No call history");
        return Ok(());
    }

    if stats {
        println!("{}", compute_stats(&calls));
        return Ok(());
    }

    let recent: Vec<&CallRecord> = calls.iter().rev().take(limit).collect();
    println!("Recent Calls (last {})", recent.len());
    println!("======================");
    for call in recent {
        println!("{}", format_call(call));
    }
    Ok(())
}
