//! Entry point.

use structopt::StructOpt;

use crate::db::Db;
use crate::opts::Opts;
use crate::prelude::*;

pub mod consts;
pub mod db;
pub mod format;
pub mod ingest;
pub mod logging;
pub mod opts;
pub mod prelude;
pub mod reading;
pub mod settings;
pub mod templates;
pub mod thinning;
pub mod web;

fn main() -> Result {
    let opts = Opts::from_args();
    logging::init(&opts)?;

    info!("Reading settings from `{}`…", opts.settings.display());
    let settings = settings::read(&opts.settings)?;
    debug!("Settings: {:?}", &settings);

    info!("Opening database `{}`…", &opts.db);
    let db = Arc::new(Mutex::new(Db::new(&opts.db)?));

    info!("Starting web server on port {}…", settings.http_port);
    web::start_server(settings, db)
}
