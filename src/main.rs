use std::path::PathBuf;

use anyhow::bail;
use staredit::{create_project, init_logging, migrate_file, project_report, Project};

const USAGE: &str = "usage:
  staredit info <file>          list the levels of a project
  staredit migrate <in> <out>   rewrite a project in the current file format
  staredit new <out>            write a new one-level project";

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::debug!("Star Edit {} (built {})", staredit::VERSION, staredit::BUILD_DATE);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["info", file] => {
            let project = Project::load(file)?;
            for line in project_report(&project) {
                println!("{}", line);
            }
        }
        ["migrate", input, output] => {
            let levels = migrate_file(&PathBuf::from(input), &PathBuf::from(output))?;
            println!("{} levels written to {}", levels, output);
        }
        ["new", output] => {
            create_project(&PathBuf::from(output))?;
            println!("Created {}", output);
        }
        ["--version"] | ["-V"] => {
            println!("staredit {} ({})", staredit::VERSION, staredit::BUILD_DATE);
        }
        _ => bail!("{}", USAGE),
    }

    Ok(())
}
