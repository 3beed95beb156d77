pub fn run() -> anyhow::Result<()> {
    println!("goolabs {}", env!("CARGO_PKG_VERSION"));
    println!("Japanese text analysis with the goo labs API");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_output() {
        let result = run();
        assert!(result.is_ok());
    }
}
