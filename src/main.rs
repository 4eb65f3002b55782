fn main() -> anyhow::Result<()> {
    trustlens_lib::run()
}
