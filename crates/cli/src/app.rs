//! Interactive console loop for the bus management system.
//!
//! Everything here is presentation: prompts, re-prompt loops, menus,
//! and table assembly. Domain rules live in `busfleet-core`; this
//! module only threads the grid and pager through the flows.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use busfleet_core::{
    fleet::SeatGrid,
    models::{FleetConfig, MAX_BUSES, MAX_SEATS_PER_BUS},
    page::{PageError, Pager},
    validate, AppConfig,
};

use crate::table::{Cell, Table};
use crate::theme::{Role, Theme};

const SEAT_MAP_COLUMNS: usize = 5;

/// Blocking prompt/response console backed by stdin and stdout.
///
/// Validation predicates come from the core; this type owns the
/// re-prompt policy (loop indefinitely, styled diagnostic per failure)
/// and the end-of-input flag.
struct Console {
    input: io::Stdin,
    output: io::Stdout,
    theme: Theme,
    eof: bool,
}

impl Console {
    fn new(theme: Theme) -> Self {
        Self {
            input: io::stdin(),
            output: io::stdout(),
            theme,
            eof: false,
        }
    }

    fn eof(&self) -> bool {
        self.eof
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write to stdout")
    }

    fn error(&mut self, text: &str) -> Result<()> {
        let painted = self.theme.danger(text);
        self.line(&painted)
    }

    fn success(&mut self, text: &str) -> Result<()> {
        let painted = self.theme.success(text);
        self.line(&painted)
    }

    fn info(&mut self, text: &str) -> Result<()> {
        let painted = self.theme.info(text);
        self.line(&painted)
    }

    fn accent(&mut self, text: &str) -> Result<()> {
        let painted = self.theme.accent(text);
        self.line(&painted)
    }

    fn table(&mut self, table: &Table) -> Result<()> {
        let rendered = table.render(&self.theme);
        self.line(&rendered)
    }

    /// Read one line, trimmed. `None` marks the end of input.
    fn read_trimmed(&mut self) -> Result<Option<String>> {
        let mut buffer = String::new();
        let read = self
            .input
            .read_line(&mut buffer)
            .context("failed to read from stdin")?;
        if read == 0 {
            self.eof = true;
            return Ok(None);
        }
        Ok(Some(buffer.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}").context("failed to write to stdout")?;
        self.output.flush().context("failed to flush stdout")?;
        self.read_trimmed()
    }

    /// Prompt until the input is a numeral in `1..=max`.
    fn prompt_in_range(&mut self, label: &str, noun: &str, max: usize) -> Result<Option<usize>> {
        loop {
            let Some(input) = self.prompt(label)? else {
                return Ok(None);
            };
            if let Some(value) = validate::parse_in_range(&input, max) {
                return Ok(Some(value));
            }
            let message =
                format!("-> Error: Invalid Input. Please enter a {noun} between 1 and {max}.");
            self.error(&message)?;
        }
    }

    /// Prompt until the input is numeric at all; the caller maps the
    /// value to a menu option and handles unmapped ones.
    fn prompt_option(&mut self, label: &str) -> Result<Option<usize>> {
        loop {
            let Some(input) = self.prompt(label)? else {
                return Ok(None);
            };
            if validate::numeric(&input) {
                // numerals too large for usize fall through as unmapped options
                return Ok(Some(input.parse().unwrap_or(usize::MAX)));
            }
            self.error("-> Error: Invalid Input. Please enter only numeric values.")?;
        }
    }

    /// Ask a yes/no question; any non-yes answer is a plain "no".
    fn confirm(&mut self, question: &str) -> Result<Option<bool>> {
        loop {
            let Some(input) = self.prompt(&format!("=> {question} (y/n): "))? else {
                return Ok(None);
            };
            if validate::yes_no(&input) {
                return Ok(Some(validate::is_affirmative(&input)));
            }
            self.error("-> Error: Invalid Input. Please enter 'y' or 'n'.")?;
        }
    }
}

/// The menu-driven application: one grid, one pager, one console.
pub struct BusApp {
    console: Console,
    grid: SeatGrid,
    pager: Pager,
}

impl BusApp {
    /// Run the startup prompts and build the application.
    ///
    /// Returns `None` when input ends before the fleet is configured.
    pub fn setup(config: &AppConfig, theme: Theme) -> Result<Option<Self>> {
        let mut console = Console::new(theme);
        console.accent("-------------- Setting up Buses --------------")?;

        let Some(bus_count) =
            console.prompt_in_range("-> Enter number of Buses: ", "number", MAX_BUSES)?
        else {
            return Ok(None);
        };
        let Some(seats_per_bus) =
            console.prompt_in_range("-> Enter number Seat of bus: ", "number", MAX_SEATS_PER_BUS)?
        else {
            return Ok(None);
        };

        let fleet = FleetConfig::new(bus_count, seats_per_bus)?;
        info!(buses = bus_count, seats = seats_per_bus, "Fleet configured");

        Ok(Some(Self {
            console,
            grid: SeatGrid::new(fleet),
            pager: Pager::new(bus_count, config.page_size),
        }))
    }

    /// Main menu loop; returns when the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_main_menu()?;
            let Some(option) = self.console.prompt_option("-> Choose option(1-5): ")? else {
                break;
            };
            match option {
                1 => self.check_bus()?,
                2 => self.booking()?,
                3 => self.cancel_booking()?,
                4 => self.reset_bus()?,
                5 => break,
                _ => self.console.line("-> Invalid option")?,
            }
            if self.console.eof() {
                break;
            }
        }
        self.console.line("-> Good bye!")?;
        info!("Session ended");
        Ok(())
    }

    fn show_main_menu(&mut self) -> Result<()> {
        self.console
            .accent("-------------- Bus Management System --------------")?;
        for item in [
            "1- Check Bus",
            "2- Booking Bus",
            "3- Cancel Booking",
            "4- Reset Bus",
            "5- Exit",
        ] {
            self.console.line(item)?;
        }
        self.console
            .accent("---------------------------------------------------")
    }

    /// Paginated fleet listing with its own navigation sub-menu.
    fn check_bus(&mut self) -> Result<()> {
        loop {
            let window = match self.pager.window() {
                Ok(window) => window,
                Err(PageError::NoData) => {
                    self.console
                        .error("-> Error: No data to display for the current page.")?;
                    return Ok(());
                }
            };
            self.render_fleet_page(window)?;

            self.console.info(
                "1. First\t2. Next Page\t3. Previous\t4. Last Page\t5. See Detail Each Bus\t6. Back",
            )?;
            let Some(option) = self.console.prompt_option("-> Choose option(1-6): ")? else {
                return Ok(());
            };
            match option {
                1 => self.pager.first(),
                2 => self.pager.next(),
                3 => self.pager.previous(),
                4 => self.pager.last(),
                5 => {
                    let Some(bus) = self.prompt_bus_id("-> Enter bus's Id: ")? else {
                        return Ok(());
                    };
                    self.show_bus_detail(bus)?;
                    return Ok(());
                }
                6 => return Ok(()),
                _ => {
                    self.console.line("-> Invalid option")?;
                    return Ok(());
                }
            }
            debug!(page = self.pager.current(), "Listing page changed");
        }
    }

    fn booking(&mut self) -> Result<()> {
        let Some(bus) = self.prompt_bus_id("-> Enter bus's Id: ")? else {
            return Ok(());
        };
        let Some(seat) = self.prompt_seat_number("-> Enter Seat number to booking: ")? else {
            return Ok(());
        };
        let Some(confirmed) = self
            .console
            .confirm(&format!("Do you want to book Seat number {seat}?"))?
        else {
            return Ok(());
        };

        if confirmed {
            match self.grid.book(bus, seat) {
                Ok(()) => {
                    info!(bus, seat, "Seat booked");
                    self.console
                        .success(&format!("-> Seat number {seat} was booked successfully!"))?;
                }
                Err(err) => {
                    warn!(bus, seat, %err, "Booking conflict");
                    self.console.error(&format!("-> Error: {err}."))?;
                }
            }
        }

        self.show_bus_detail(bus)
    }

    fn cancel_booking(&mut self) -> Result<()> {
        let Some(bus) = self.prompt_bus_id("-> Enter bus's Id: ")? else {
            return Ok(());
        };
        self.show_bus_detail(bus)?;

        let Some(seat) = self.prompt_seat_number("-> Enter Seat number to cancel booking: ")?
        else {
            return Ok(());
        };
        let Some(confirmed) = self
            .console
            .confirm(&format!("Do you want to cancel booking seat number {seat}?"))?
        else {
            return Ok(());
        };

        if confirmed {
            match self.grid.cancel(bus, seat) {
                Ok(()) => {
                    info!(bus, seat, "Booking canceled");
                    self.console.success(&format!(
                        "-> Seat number {seat} was canceled booking successfully!"
                    ))?;
                }
                Err(err) => {
                    warn!(bus, seat, %err, "Cancel conflict");
                    self.console.error(&format!("-> Error: {err}."))?;
                }
            }
        }
        Ok(())
    }

    fn reset_bus(&mut self) -> Result<()> {
        let Some(bus) = self.prompt_bus_id("-> Enter bus Id: ")? else {
            return Ok(());
        };
        let Some(confirmed) = self
            .console
            .confirm(&format!("Do you want to reset bus {bus}?"))?
        else {
            return Ok(());
        };

        if confirmed {
            self.grid.reset_bus(bus);
            info!(bus, "Bus reset");
            self.console
                .success(&format!("-> Bus {bus} was reset successfully!"))?;
        }
        Ok(())
    }

    fn prompt_bus_id(&mut self, label: &str) -> Result<Option<usize>> {
        let max = self.grid.config().bus_count();
        self.console.prompt_in_range(label, "bus ID", max)
    }

    fn prompt_seat_number(&mut self, label: &str) -> Result<Option<usize>> {
        let max = self.grid.config().seats_per_bus();
        self.console.prompt_in_range(label, "seat number", max)
    }

    fn render_fleet_page(&mut self, window: Range<usize>) -> Result<()> {
        let title = format!(
            "Display All Bus information (Page {}/{})",
            self.pager.current(),
            self.pager.total_pages()
        );
        let mut table = Table::new(4)
            .min_width(14)
            .title(Cell::plain(title))
            .header(vec![
                Cell::styled("ID", Role::Success),
                Cell::styled("Seat", Role::Success),
                Cell::styled("Available", Role::Success),
                Cell::styled("Unavailable", Role::Danger),
            ]);

        let seats_per_bus = self.grid.config().seats_per_bus();
        for index in window {
            let bus = index + 1;
            let summary = self.grid.summarize(bus);
            table.row(vec![
                Cell::plain(bus.to_string()),
                Cell::styled(seats_per_bus.to_string(), Role::Info),
                Cell::styled(summary.available.to_string(), Role::Success),
                Cell::styled(summary.unavailable.to_string(), Role::Danger),
            ]);
        }
        self.console.table(&table)
    }

    /// Labeled seat map for one bus, followed by the legend line.
    fn show_bus_detail(&mut self, bus: usize) -> Result<()> {
        let states = self.grid.seat_states(bus).to_vec();
        let columns = states.len().min(SEAT_MAP_COLUMNS);
        let mut table = Table::new(columns)
            .min_width(12)
            .title(Cell::plain(format!("Bus {bus} Information")))
            .header(vec![Cell::plain("Seat"); columns]);

        let mut row = Vec::with_capacity(columns);
        for (index, booked) in states.into_iter().enumerate() {
            let seat = index + 1;
            row.push(if booked {
                Cell::styled(format!("(-) {seat}"), Role::Danger)
            } else {
                Cell::styled(format!("(+) {seat}"), Role::Success)
            });
            if row.len() == columns {
                table.row(std::mem::take(&mut row));
            }
        }
        if !row.is_empty() {
            table.row(row);
        }
        self.console.table(&table)?;

        let summary = self.grid.summarize(bus);
        let legend = format!(
            "{}    {}",
            self.console
                .theme()
                .danger(&format!("(-) : Unavailable({})", summary.unavailable)),
            self.console
                .theme()
                .success(&format!("(+) : Available({})", summary.available)),
        );
        self.console.line(&legend)
    }
}
