//! voicebox main entry point
//!
//! The event loop watches stdin for keys, polls the speech backend until its
//! voices are ready, and redraws the pickers after every change.

use log::{debug, error, info};
use mio::{Events, Interest, Poll, Token};
use nix::libc;
use nix::sys::signal::{self, SigHandler, Signal};
use std::io::{self, Read};
use std::os::unix::io::{AsRawFd, RawFd};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use voicebox::input::{create_default_keymap, DefaultKeyHandler};
use voicebox::speech::{create_synth, Synth};
use voicebox::state::config::Config;
use voicebox::state::App;
use voicebox::terminal::{
    get_terminal_size, is_tty, restore_termios, set_raw_mode, write_raw_line,
};
use voicebox::ui::TerminalView;
use voicebox::voice::{Languages, Voice};
use voicebox::{Result, VoiceboxError};

/// Token for stdin in mio poll
const STDIN: Token = Token(0);

/// Upper bound on how long a poll may block, so resizes are noticed
const TICK: Duration = Duration::from_millis(100);

/// Global flag set by SIGWINCH handler
static RESIZE_PENDING: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_sigwinch(_: libc::c_int) {
    RESIZE_PENDING.store(true, Ordering::Relaxed);
}

struct Options {
    debug: bool,
    list_voices: bool,
    json: bool,
}

impl Options {
    fn parse() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let has = |names: &[&str]| args.iter().any(|a| names.contains(&a.as_str()));
        Self {
            debug: has(&["--debug", "-d"]),
            list_voices: has(&["--list-voices"]),
            json: has(&["--json"]),
        }
    }
}

fn main() {
    let options = Options::parse();

    if options.debug {
        // Debug mode: write to voicebox.log, the terminal belongs to the UI
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("voicebox.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open voicebox.log for debug logging: {}", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "voicebox version {} starting (debug mode, logging to voicebox.log)",
            voicebox::VERSION
        );
    } else {
        // Errors only; stderr shares the raw-mode terminal with the UI
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .parse_default_env()
            .format(|buf, record| {
                write_raw_line(buf, &format!("[{}] {}", record.level(), record.args()))
            })
            .init();
    }

    let result = if options.list_voices {
        list_voices(options.json)
    } else {
        run()
    };

    if let Err(e) = result {
        error!("Fatal error: {}", e);
        eprintln!("voicebox: {}", e);
        process::exit(1);
    }
}

/// Print the grouped voices and exit
fn list_voices(json: bool) -> Result<()> {
    let config = Config::load()?;
    let mut synth = create_synth()?;
    let voices = wait_for_voices(synth.as_mut(), &config)?;
    let languages = Languages::from_voices(&voices, &config.language_family());

    if json {
        println!("{}", serde_json::to_string_pretty(languages.groups())?);
        return Ok(());
    }

    for group in languages.groups() {
        println!("{}", group.locale);
        for voice in &group.voices {
            println!("  {}  ({})", voice.name, voice.id);
        }
    }
    Ok(())
}

/// Poll the backend until it reports voices or the configured wait passes
fn wait_for_voices(synth: &mut dyn Synth, config: &Config) -> Result<Vec<Voice>> {
    let deadline = Instant::now() + config.voice_wait();
    loop {
        let voices = synth.voices()?;
        if !voices.is_empty() || Instant::now() >= deadline {
            return Ok(voices);
        }
        std::thread::sleep(config.voice_poll_interval());
    }
}

fn run() -> Result<()> {
    debug!("Initializing voicebox");

    let stdin_fd = io::stdin().as_raw_fd();
    if !is_tty(stdin_fd) {
        eprintln!("Error: voicebox requires an interactive terminal (stdin is not a TTY)");
        eprintln!("Use --list-voices to print the available voices instead");
        process::exit(1);
    }

    let config = Config::load()?;
    info!("Configuration loaded from {:?}", config.path());

    let synth = create_synth()?;
    let (cols, _rows) = get_terminal_size(stdin_fd)?;
    let view = TerminalView::new(io::stdout(), cols);
    let mut app = App::new(config, synth, view)?;

    let original_termios = set_raw_mode(stdin_fd)?;
    let _guard = TermiosGuard {
        fd: stdin_fd,
        termios: original_termios,
    };

    unsafe {
        signal::signal(Signal::SIGWINCH, SigHandler::Handler(handle_sigwinch)).map_err(|e| {
            VoiceboxError::Terminal(format!("Failed to set SIGWINCH handler: {}", e))
        })?;
    }

    let mut poll = Poll::new()?;
    let mut stdin_source = mio::unix::SourceFd(&stdin_fd);
    poll.registry()
        .register(&mut stdin_source, STDIN, Interest::READABLE)?;
    let mut events = Events::with_capacity(16);

    let handler = DefaultKeyHandler::new(create_default_keymap());
    let poll_interval = app.config.voice_poll_interval();
    let deadline = Instant::now() + app.config.voice_wait();
    let mut next_voice_poll = Instant::now();

    info!("voicebox ready - entering event loop");
    app.view.draw("Waiting for voices...")?;

    loop {
        if RESIZE_PENDING.swap(false, Ordering::Relaxed) {
            let (new_cols, _) = get_terminal_size(stdin_fd)?;
            info!("Terminal resized to {} columns", new_cols);
            app.view.resize(new_cols);
            app.view.draw("")?;
        }

        if !app.is_initialized() && Instant::now() >= next_voice_poll {
            if app.try_init(Instant::now() >= deadline) {
                app.view.draw("")?;
            } else {
                next_voice_poll = Instant::now() + poll_interval;
            }
        }

        match poll.poll(&mut events, Some(TICK.min(poll_interval))) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }

        for event in events.iter() {
            if event.token() != STDIN {
                continue;
            }

            let mut buf = [0u8; 1024];
            let n = io::stdin().read(&mut buf)?;
            if n == 0 {
                info!("stdin closed");
                return Ok(());
            }

            for command in handler.process_key(&buf[..n]) {
                match app.handle(command) {
                    Ok(true) => {}
                    Ok(false) => {
                        info!("Quit requested");
                        app.shutdown();
                        return Ok(());
                    }
                    // Speech failures leave the picker usable
                    Err(e) => error!("{}", e),
                }
            }
            app.view.draw("")?;
        }
    }
}

/// RAII guard to restore terminal on exit
struct TermiosGuard {
    fd: RawFd,
    termios: libc::termios,
}

impl Drop for TermiosGuard {
    fn drop(&mut self) {
        restore_termios(self.fd, &self.termios);
        debug!("Terminal attributes restored");
    }
}
