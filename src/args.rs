use clap::{App, AppSettings, Arg, ErrorKind};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

pub const USAGE: &str = "Uso: compute_sales priceCatalogue.json salesRecord.json";

#[derive(Debug)]
pub struct Args {
    pub price_catalogue_file: PathBuf,
    pub sales_record_file: PathBuf,
}

impl Args {
    /// Parses the process arguments, printing the usage line and exiting with
    /// status 1 unless exactly two file paths were given.
    pub fn parse() -> Self {
        match Self::try_parse_from(std::env::args_os()) {
            Ok(args) => args,
            Err(_) => {
                println!("{}", USAGE);
                process::exit(1);
            }
        }
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        // The program name plus exactly two paths, whatever they look like.
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 3 {
            return Err(clap::Error::with_description(
                USAGE,
                ErrorKind::WrongNumberOfValues,
            ));
        }

        // Paths may start with a hyphen, so no flags are recognised at all.
        let matches = App::new("compute_sales")
            .version("0.1.0")
            .setting(AppSettings::DisableHelpFlags)
            .setting(AppSettings::DisableVersion)
            .setting(AppSettings::AllowLeadingHyphen)
            .arg(Arg::with_name("price_catalogue_file")
                .takes_value(true).required(true).allow_hyphen_values(true)
                .help("path of the JSON price catalogue"))
            .arg(Arg::with_name("sales_record_file")
                .takes_value(true).required(true).allow_hyphen_values(true)
                .help("path of the JSON sales record"))
            .get_matches_from_safe(args)?;

        Ok(Self {
            price_catalogue_file: PathBuf::from(
                matches.value_of_os("price_catalogue_file").unwrap_or_default(),
            ),
            sales_record_file: PathBuf::from(
                matches.value_of_os("sales_record_file").unwrap_or_default(),
            ),
        })
    }
}
