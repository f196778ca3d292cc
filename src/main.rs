//! Trazo - a colorful terminal sketchbook.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use trazo::error::TrazoError;
use trazo::family::{self, FamilyTree, Person};
use trazo::pixel::{self, canvas::CANVAS_SIZES, EditorState, Tool};
use trazo::plot::{self, catalog::Function, SessionOptions};
use trazo::todo::{self, TaskList};

#[derive(Parser, Debug)]
#[command(name = "trazo")]
#[command(about = "A colorful terminal sketchbook", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot a catalog function on an ASCII grid
    Plot {
        /// Menu number of the function to plot (skips the interactive menu)
        #[arg(long)]
        function: Option<u32>,

        /// Grid width in cells
        #[arg(long, default_value_t = 50)]
        width: usize,

        /// Grid height in cells
        #[arg(long, default_value_t = 20)]
        height: usize,

        /// Number of redraw frames after the initial render
        #[arg(long, default_value_t = 5)]
        frames: u32,

        /// Delay between redraw frames in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },

    /// Edit pixel art in the terminal
    Pixel {
        /// Canvas file to load and save
        #[arg(default_value = "pixelart.pix")]
        file: PathBuf,
    },

    /// Manage the todo list
    Todo {
        /// Task file
        #[arg(long, default_value = "tasks.txt")]
        file: PathBuf,

        #[command(subcommand)]
        action: TodoAction,
    },

    /// Inspect a family tree
    Family {
        #[command(subcommand)]
        action: FamilyAction,
    },
}

#[derive(Subcommand, Debug)]
enum TodoAction {
    /// Show all tasks
    List,
    /// Add a task
    Add {
        /// The task text
        task: String,
    },
    /// Remove a task
    Remove {
        /// The task text to remove
        task: String,
    },
}

#[derive(Subcommand, Debug)]
enum FamilyAction {
    /// Load a CSV file and print the tree
    Show {
        /// The family CSV file
        file: PathBuf,
    },
    /// Append a member to the CSV file and print the updated tree
    Add {
        /// The family CSV file
        file: PathBuf,
        /// Id of the new member
        id: String,
        /// Name of the new member
        name: String,
        /// Gender of the new member
        gender: String,
        /// Comma-separated parent ids
        #[arg(long, value_delimiter = ',')]
        parents: Vec<String>,
        /// Comma-separated child ids
        #[arg(long, value_delimiter = ',')]
        children: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Trazo");
    }

    let res = match args.command {
        Command::Plot {
            function,
            width,
            height,
            frames,
            delay_ms,
        } => run_plot(
            function,
            SessionOptions {
                width,
                height,
                frames,
                delay: Duration::from_millis(delay_ms),
            },
        ),
        Command::Pixel { file } => run_pixel_editor(file),
        Command::Todo { file, action } => run_todo(&file, action),
        Command::Family { action } => run_family(action),
    };

    if let Err(err) = res {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    if args.log.is_some() {
        tracing::info!("Trazo exited");
    }

    Ok(())
}

fn run_plot(function: Option<u32>, options: SessionOptions) -> trazo::Result<()> {
    match function {
        Some(choice) => {
            let function = Function::from_choice(choice)
                .ok_or_else(|| TrazoError::invalid_selection(choice.to_string()))?;
            plot::run_with(function, options)
        },
        None => plot::run(options),
    }
}

fn run_todo(file: &std::path::Path, action: TodoAction) -> trazo::Result<()> {
    let mut list = TaskList::load(file)?;

    match action {
        TodoAction::List => {},
        TodoAction::Add { task } => {
            list.add(task);
            list.save(file)?;
        },
        TodoAction::Remove { task } => {
            list.remove(&task)?;
            list.save(file)?;
        },
    }

    todo::print_list(&mut io::stdout(), &list)?;
    Ok(())
}

fn run_family(action: FamilyAction) -> trazo::Result<()> {
    match action {
        FamilyAction::Show { file } => {
            let tree = FamilyTree::load_csv(&file)?;
            family::print_tree(&mut io::stdout(), &tree)?;
        },
        FamilyAction::Add {
            file,
            id,
            name,
            gender,
            parents,
            children,
        } => {
            let person = Person {
                id,
                name,
                gender,
                parents,
                children,
            };
            family::append_csv(&file, &person)?;

            let tree = FamilyTree::load_csv(&file)?;
            println!("Updated tree:");
            family::print_tree(&mut io::stdout(), &tree)?;
        },
    }
    Ok(())
}

fn run_pixel_editor(file: PathBuf) -> trazo::Result<()> {
    let state = EditorState::open(file)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_editor(&mut terminal, state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_editor<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut state: EditorState,
) -> trazo::Result<()> {
    loop {
        terminal.draw(|f| pixel::ui::draw(f, &state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Picker overlay - handle separately
                if state.picker_open {
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('c') => {
                            state.close_picker();
                        },
                        KeyCode::Left | KeyCode::Char('h') => state.picker_left(),
                        KeyCode::Right | KeyCode::Char('l') => state.picker_right(),
                        KeyCode::Enter | KeyCode::Char(' ') => state.pick_color(),
                        _ => {},
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Cursor movement
                    (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        state.cursor_up();
                    },
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        state.cursor_down();
                    },
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        state.cursor_left();
                    },
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        state.cursor_right();
                    },

                    // Drawing
                    (KeyModifiers::NONE, KeyCode::Char(' ')) => state.apply_tool(),
                    (KeyModifiers::NONE, KeyCode::Char('p')) => state.select_tool(Tool::Paint),
                    (KeyModifiers::NONE, KeyCode::Char('e')) => state.select_tool(Tool::Erase),

                    // Color picker
                    (KeyModifiers::NONE, KeyCode::Char('c')) => state.open_picker(),

                    // Canvas sizes
                    (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='5')) => {
                        let size = CANVAS_SIZES[c as usize - '1' as usize];
                        state.set_canvas_size(size);
                    },

                    // Clear and save
                    (KeyModifiers::NONE, KeyCode::Char('x')) => state.clear_canvas(),
                    (KeyModifiers::NONE, KeyCode::Char('s')) => state.save(),

                    _ => {},
                }
            }
        }
    }
}
