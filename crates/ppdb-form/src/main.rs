use anyhow::Result;

fn main() -> Result<()> {
    ppdb_form::cli::main()
}
