use color_eyre::eyre::bail;
use geotag::utils::expand_paths;
use geotag::{GeoPoint, GeotagError, Geotagger, LocationSummary, TagSummary};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
geotag - write a GPS position into JPEG files

USAGE:
  geotag --lat <DEG> --lon <DEG> [OPTIONS] <PATH>...
  geotag --read <PATH>...

OPTIONS:
  --lat <DEG>        Latitude in decimal degrees, south is negative
  --lon <DEG>        Longitude in decimal degrees, west is negative
  --altitude <M>     Altitude in meters (default: 1)
  --exiftool <PATH>  exiftool executable used by --read
  --hidden           Include hidden files when walking directories
  --read             Print the stored position instead of writing one
  --json             Print results as JSON
  -h, --help         Print help

Directories are searched recursively for .jpg/.jpeg files.
Set RUST_LOG=debug for conversion details.
";

#[derive(Debug)]
struct Args {
    help: bool,
    latitude: Option<f64>,
    longitude: Option<f64>,
    altitude: Option<f64>,
    exiftool: Option<PathBuf>,
    hidden: bool,
    read: bool,
    json: bool,
    paths: Vec<PathBuf>,
}

/// Parses flags; whatever is left must be paths, not unknown flags.
fn parse_args(mut args: pico_args::Arguments) -> color_eyre::Result<Args> {
    let mut parsed = Args {
        help: args.contains(["-h", "--help"]),
        latitude: args.opt_value_from_str("--lat")?,
        longitude: args.opt_value_from_str("--lon")?,
        altitude: args.opt_value_from_str("--altitude")?,
        exiftool: args.opt_value_from_str("--exiftool")?,
        hidden: args.contains("--hidden"),
        read: args.contains("--read"),
        json: args.contains("--json"),
        paths: Vec::new(),
    };
    for arg in args.finish() {
        if is_flag(&arg) {
            bail!("Unknown option {}\n\n{HELP}", arg.to_string_lossy());
        }
        parsed.paths.push(PathBuf::from(arg));
    }
    Ok(parsed)
}

fn is_flag(arg: &OsString) -> bool {
    arg.to_str().is_some_and(|s| s.len() > 1 && s.starts_with('-'))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(pico_args::Arguments::from_env())?;
    if args.help {
        print!("{HELP}");
        return Ok(());
    }
    if args.paths.is_empty() {
        bail!("No files given\n\n{HELP}");
    }
    let files = expand_paths(&args.paths, args.hidden)?;

    let mut tagger = Geotagger::builder()
        .maybe_exiftool_path(args.exiftool)
        .maybe_altitude(args.altitude)
        .build()?;

    if args.read {
        return read_files(&mut tagger, &files, args.json);
    }

    let (Some(latitude), Some(longitude)) = (args.latitude, args.longitude) else {
        return Err(GeotagError::NoLocation.into());
    };
    let point = GeoPoint {
        latitude,
        longitude,
    };
    println!("Location: {point} ({})", tagger.describe(point));

    let reports = tagger.tag_files(point, &files)?;
    let failed = reports.iter().filter(|r| !r.is_ok()).count();

    if args.json {
        let summaries: Vec<TagSummary> = reports.iter().map(TagSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for report in &reports {
            match &report.result {
                Ok(()) => println!("tagged  {}", report.path.display()),
                Err(e) => println!("failed  {}: {e}", report.path.display()),
            }
        }
        println!("Tagged {} of {} files.", reports.len() - failed, reports.len());
    }

    if failed > 0 {
        bail!("{failed} file(s) could not be tagged");
    }
    Ok(())
}

fn read_files(tagger: &mut Geotagger, files: &[PathBuf], json: bool) -> color_eyre::Result<()> {
    let reports = tagger.read_locations(files);
    let summaries: Vec<LocationSummary> = reports.iter().map(|r| tagger.summarize(r)).collect();
    let failed = summaries.iter().filter(|s| s.error.is_some()).count();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            let path = summary.path.display();
            match (&summary.position, &summary.location, &summary.error) {
                (_, _, Some(error)) => println!("{path}: failed: {error}"),
                (Some(point), Some(place), None) => println!("{path}: {point} ({place})"),
                _ => println!("{path}: no GPS position"),
            }
        }
    }

    if failed > 0 {
        bail!("{failed} file(s) could not be read");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pico_args::Arguments;

    fn args(list: &[&str]) -> Arguments {
        Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn test_parses_flags_and_paths() {
        let parsed = parse_args(args(&[
            "--lat", "48.85826", "--lon", "-2.29448", "--json", "a.jpg", "photos",
        ]))
        .unwrap();
        assert_eq!(parsed.latitude, Some(48.85826));
        assert_eq!(parsed.longitude, Some(-2.29448));
        assert!(parsed.json);
        assert!(!parsed.read);
        assert_eq!(parsed.paths, vec![PathBuf::from("a.jpg"), PathBuf::from("photos")]);
    }

    #[test]
    fn test_rejects_unknown_long_flag() {
        let result = parse_args(args(&["--latitude", "48.85826", "--lon", "2.29448", "a.jpg"]));
        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Unknown option --latitude"), "{message}");
    }

    #[test]
    fn test_rejects_unknown_short_flag() {
        assert!(parse_args(args(&["--read", "-x", "a.jpg"])).is_err());
    }

    #[test]
    fn test_help_flag_is_recognized() {
        let parsed = parse_args(args(&["-h"])).unwrap();
        assert!(parsed.help);
        assert!(parsed.paths.is_empty());
    }

    #[test]
    fn test_dash_alone_is_a_path() {
        let parsed = parse_args(args(&["--read", "-"])).unwrap();
        assert_eq!(parsed.paths, vec![PathBuf::from("-")]);
    }
}
