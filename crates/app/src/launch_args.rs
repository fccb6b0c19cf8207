use std::path::PathBuf;

/// Command-line overrides. Each flag accepts `--flag value` or `--flag=value`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaunchArgs {
    pub seed: Option<u64>,
    pub save_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

pub fn resolve_launch_args(args: &[String]) -> Result<LaunchArgs, String> {
    let mut launch = LaunchArgs::default();
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let (flag, inline_value) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (argument, None),
        };

        let value = match flag {
            "--seed" | "--save" | "--config" => match inline_value {
                Some(value) => value,
                None => {
                    index += 1;
                    let Some(value) = args.get(index) else {
                        return Err(format!("missing value for {flag}"));
                    };
                    value.as_str()
                }
            },
            _ => return Err(format!("unrecognized argument '{argument}'")),
        };

        match flag {
            "--seed" => set_once(&mut launch.seed, flag, parse_seed_value(value)?)?,
            "--save" => set_once(&mut launch.save_dir, flag, PathBuf::from(value))?,
            _ => set_once(&mut launch.config_path, flag, PathBuf::from(value))?,
        }
        index += 1;
    }

    Ok(launch)
}

fn set_once<T>(slot: &mut Option<T>, flag: &str, value: T) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("{flag} provided more than once"));
    }
    *slot = Some(value);
    Ok(())
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}
