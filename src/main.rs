fn main() -> anyhow::Result<()> {
    orgfolders::run()?;
    Ok(())
}
