use std::{fs::File, io::Write};

use env_logger::{Builder, Target, fmt::Formatter};

use crate::Result;
use crate::io::options::{BenchOptions, LogFormat};

pub fn init_logger(options: &BenchOptions) -> Result<()> {
    let log_format = options.log_format;
    let log_timestamp = options.log_timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(options.log_level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }

            match log_format {
                LogFormat::Compact => {
                    writeln!(buf, "{:<5} {}", record.level(), record.args())
                }
                LogFormat::Pretty => {
                    writeln!(
                        buf,
                        "{:<5} [{}] {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                }
            }
        });

    match options.log_output_path() {
        Some(log_path) => {
            let log_file = File::create(log_path).map_err(|e| {
                crate::Error::other(format!(
                    "failed to create log output file {}: {e}",
                    log_path.display()
                ))
            })?;
            builder.target(Target::Pipe(Box::new(log_file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder
        .try_init()
        .map_err(|e| crate::Error::other(format!("logger init failed: {e}")))
}
