extern crate deskpick as lib;

use flexi_logger::{FileSpec, Logger};
use lib::calendar::{self, CalendarPicker};
use lib::events::{Dispatcher, Event};
use lib::ui::{App, Context};
use nix::sys::{signal, termios};
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dp",
    about = "Deskpick - calendar and wallpaper picker for the terminal desktop."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only draw the desktop once non-interactively"
    )]
    pub show: bool,

    #[structopt(short = "g", long = "gallery", help = "start with the wallpaper gallery open")]
    pub gallery: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    } else {
        // Never write log lines into the screen we are drawing on
        logger = logger.do_not_log();
    }

    logger.start()?;

    const STDIN: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(termios::tcgetattr(STDIN)?);

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        if let Ok(attr) = orig_attr.lock() {
            let _ = termios::tcsetattr(STDIN, termios::SetArg::TCSANOW, &attr);
        }

        println!("Deskpick ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let mut signals_to_wait = signal::SigSet::empty();
    signals_to_wait.add(signal::SIGWINCH);

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;
    let catalog = config.catalog()?;

    let dispatcher = Dispatcher::from_config(&config, signals_to_wait);
    let sink = dispatcher.event_sink().clone();

    let today = calendar::today();
    let mut picker = CalendarPicker::with_today(today).on_date_select({
        let sink = sink.clone();
        move |date| {
            let _ = sink.send(Event::DateSelected(date));
        }
    });
    if let Some(date) = config.initial_selected_date()? {
        picker = picker.initial_selected_date(date);
    }

    // Setup unsegen terminal
    let stdout = stdout();
    let mut term = Terminal::new(stdout.lock())?;

    let mut app = App::new(&config, catalog, Context::new(picker, today), sink);

    if args.gallery {
        app.open_gallery();
    }

    if args.show {
        app.draw(&mut term);
        return Ok(());
    }

    app.run(dispatcher, term)
}
