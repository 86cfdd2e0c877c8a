use std::path::PathBuf;

/// Paths supplied on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchArgs {
    pub scenario: Option<PathBuf>,
    pub record: Option<PathBuf>,
}

pub fn resolve_launch_args(args: &[String]) -> Result<LaunchArgs, String> {
    let mut launch = LaunchArgs::default();
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();

        for (flag, slot) in [("--scenario", &mut launch.scenario), ("--record", &mut launch.record)] {
            if argument == flag {
                let next = args.get(index + 1).filter(|value| !value.starts_with("--"));
                let Some(value) = next else {
                    return Err(format!("missing value for {flag}"));
                };
                set_once(slot, flag, value)?;
                index += 1;
            } else if let Some(value) = argument.strip_prefix(flag).and_then(|rest| rest.strip_prefix('='))
            {
                set_once(slot, flag, value)?;
            }
        }
        index += 1;
    }

    Ok(launch)
}

fn set_once(slot: &mut Option<PathBuf>, flag: &str, value: &str) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("{flag} provided more than once"));
    }
    if value.is_empty() {
        return Err(format!("{flag} needs a non-empty path"));
    }
    *slot = Some(PathBuf::from(value));
    Ok(())
}
