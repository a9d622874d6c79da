//! Interactive menu shell.
//!
//! This module provides:
//! - The menu loop reading choices and operands from any `BufRead`
//! - Section runners that call into `MathService` and print the results
//! - Input validation and result formatting helpers

mod format;
mod input;
mod menu;
mod report;

pub use format::format_fixed;
pub use input::{as_bounded_integer, parse_choice, parse_number};
pub use menu::MenuItem;
pub use report::ReportLine;

use std::f64::consts::E;
use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::calculator::{MathError, MathService};
use crate::config::DisplayConfig;

/// Reasons a shell section stops early.
#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    /// A calculation failed. The menu loop reports it and keeps going.
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input was closed while waiting for a value.
    #[error("input closed")]
    EndOfInput,
}

/// Menu-driven front end over a [`MathService`].
pub struct Shell<R, W> {
    service: MathService,
    display: DisplayConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(service: MathService, display: DisplayConfig, input: R, output: W) -> Self {
        Self {
            service,
            display,
            input,
            output,
        }
    }

    /// Consume the shell and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!("starting math operations shell");

        writeln!(self.output, "=== Math Operations Calculator ===")?;
        writeln!(self.output, "Welcome to the Math Operations Application!")?;

        loop {
            self.show_menu()?;

            let choice = match self.prompt(
                "Enter your choice: ",
                "Please enter a valid integer: ",
                parse_choice,
            ) {
                Ok(choice) => choice,
                Err(ShellError::EndOfInput) => break,
                Err(err) => return Err(err),
            };
            debug!(choice, "menu choice");

            match MenuItem::from_choice(choice) {
                Some(MenuItem::Exit) => {
                    writeln!(self.output, "Thank you for using Math Operations Calculator!")?;
                    break;
                }
                Some(item) => match self.run_section(item) {
                    Ok(()) => {}
                    Err(ShellError::Math(err)) => self.report_failure(&err)?,
                    Err(ShellError::EndOfInput) => break,
                    Err(err) => return Err(err),
                },
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }

            writeln!(self.output, "\nPress Enter to continue...")?;
            self.output.flush()?;
            if self.read_line()?.is_none() {
                break;
            }
        }

        self.output.flush()?;
        info!("math operations shell terminated");
        Ok(())
    }

    /// Run one menu section. `Exit` does nothing.
    pub fn run_section(&mut self, item: MenuItem) -> Result<(), ShellError> {
        if item == MenuItem::Exit {
            return Ok(());
        }

        writeln!(self.output, "\n=== {} ===", item.section_name())?;
        match item {
            MenuItem::Basic => self.basic_operations(),
            MenuItem::Advanced => self.advanced_operations(),
            MenuItem::Trigonometric => self.trigonometric_operations(),
            MenuItem::Demo => self.demo_calculations(),
            MenuItem::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Main Menu ===")?;
        for item in MenuItem::ALL {
            writeln!(self.output, "{}. {}", item.key(), item.label())?;
        }
        Ok(())
    }

    fn report_failure(&mut self, err: &MathError) -> io::Result<()> {
        warn!(operation = err.operation(), error = %err, "error during calculation");
        writeln!(self.output, "Error: {}", err)
    }

    fn basic_operations(&mut self) -> Result<(), ShellError> {
        let a = self.prompt_number("Enter first number: ")?;
        let b = self.prompt_number("Enter second number: ")?;

        let decimals = self.display.decimals;
        let fmt = move |v: f64| format_fixed(v, decimals);
        let (fa, fb) = (fmt(a), fmt(b));

        let lines = [
            ReportLine::value(
                "Addition",
                format!("{} + {} = {}", fa, fb, fmt(self.service.add(a, b))),
            ),
            ReportLine::value(
                "Subtraction",
                format!("{} - {} = {}", fa, fb, fmt(self.service.subtract(a, b))),
            ),
            ReportLine::value(
                "Multiplication",
                format!("{} * {} = {}", fa, fb, fmt(self.service.multiply(a, b))),
            ),
            ReportLine::from_result("Division", self.service.divide(a, b), |q| {
                format!("{} / {} = {}", fa, fb, fmt(q))
            }),
            ReportLine::from_result("Modulo", self.service.modulo(a, b), |r| {
                format!("{} % {} = {}", fa, fb, fmt(r))
            }),
        ];
        self.print_results(&lines)
    }

    fn advanced_operations(&mut self) -> Result<(), ShellError> {
        let x = self.prompt_number("Enter a number: ")?;

        let decimals = self.display.decimals;
        let fmt = move |v: f64| format_fixed(v, decimals);
        let fx = fmt(x);

        let mut lines = vec![
            ReportLine::value(
                format!("Square ({}^2)", fx),
                fmt(self.service.power(x, 2.0)),
            ),
            ReportLine::value(
                format!("Cube ({}^3)", fx),
                fmt(self.service.power(x, 3.0)),
            ),
            ReportLine::from_result("Square root", self.service.square_root(x), fmt),
            ReportLine::value("Cube root", fmt(self.service.cube_root(x))),
            ReportLine::value("Absolute value", fmt(self.service.absolute(x))),
            ReportLine::from_result("Natural log", self.service.natural_log(x), fmt),
            ReportLine::from_result("Log base 10", self.service.log10(x), fmt),
        ];

        if let Some(n) = as_bounded_integer(x, self.display.max_factorial) {
            lines.push(ReportLine::from_result(
                "Factorial",
                self.service.factorial(n),
                |v| v.to_string(),
            ));
        }
        self.print_results(&lines)
    }

    fn trigonometric_operations(&mut self) -> Result<(), ShellError> {
        let angle = self.prompt_number("Enter angle in degrees: ")?;
        let radians = self.service.degrees_to_radians(angle);

        let fa = format_fixed(angle, self.display.decimals);
        let trig_decimals = self.display.trig_decimals;
        let fmt = move |v: f64| format_fixed(v, trig_decimals);

        let lines = [
            ReportLine::value("Angle in radians", fmt(radians)),
            ReportLine::value(format!("Sin({}°)", fa), fmt(self.service.sin(radians))),
            ReportLine::value(format!("Cos({}°)", fa), fmt(self.service.cos(radians))),
            ReportLine::value(format!("Tan({}°)", fa), fmt(self.service.tan(radians))),
        ];
        self.print_results(&lines)
    }

    /// Print the fixed showcase computations.
    fn demo_calculations(&mut self) -> Result<(), ShellError> {
        let d = self.display.decimals;
        let t = self.display.trig_decimals;
        let service = &self.service;
        let out = &mut self.output;

        writeln!(out, "Basic Operations Demo:")?;
        writeln!(out, "10 + 5 = {}", format_fixed(service.add(10.0, 5.0), d))?;
        writeln!(out, "10 - 5 = {}", format_fixed(service.subtract(10.0, 5.0), d))?;
        writeln!(out, "10 * 5 = {}", format_fixed(service.multiply(10.0, 5.0), d))?;
        writeln!(out, "10 / 5 = {}", format_fixed(service.divide(10.0, 5.0)?, d))?;

        writeln!(out, "\nAdvanced Operations Demo:")?;
        writeln!(out, "2^8 = {}", format_fixed(service.power(2.0, 8.0), d))?;
        writeln!(out, "√16 = {}", format_fixed(service.square_root(16.0)?, d))?;
        writeln!(out, "5! = {}", service.factorial(5)?)?;
        writeln!(out, "ln(e) = {}", format_fixed(service.natural_log(E)?, t))?;

        writeln!(out, "\nTrigonometric Operations Demo:")?;
        let sin30 = service.sin(service.degrees_to_radians(30.0));
        let cos60 = service.cos(service.degrees_to_radians(60.0));
        let tan45 = service.tan(service.degrees_to_radians(45.0));
        writeln!(out, "Sin(30°) = {}", format_fixed(sin30, t))?;
        writeln!(out, "Cos(60°) = {}", format_fixed(cos60, t))?;
        writeln!(out, "Tan(45°) = {}", format_fixed(tan45, t))?;
        Ok(())
    }

    fn print_results(&mut self, lines: &[ReportLine]) -> Result<(), ShellError> {
        writeln!(self.output, "\nResults:")?;
        for line in lines {
            if line.is_error {
                debug!(label = %line.label, error = %line.text, "operation reported failure");
            }
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn prompt_number(&mut self, prompt: &str) -> Result<f64, ShellError> {
        self.prompt(prompt, "Please enter a valid number: ", parse_number)
    }

    /// Prompt until `parse` accepts a line.
    fn prompt<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: fn(&str) -> Option<T>,
    ) -> Result<T, ShellError> {
        write!(self.output, "{}", prompt)?;
        loop {
            self.output.flush()?;
            let line = self.read_line()?.ok_or(ShellError::EndOfInput)?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }
            write!(self.output, "{}", retry)?;
        }
    }

    /// Read one line, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced, so such a line fails to parse
    /// and is prompted for again.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
