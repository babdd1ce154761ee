use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::bio::{Bio, Height, Name, Weight};
use crate::bmi::Bmi;
use crate::error::Error;

const ATTEMPTS: u32 = 3;

pub struct Session<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self) -> Result<(), Error> {
        let Some(name) = self.name()? else { return Ok(()) };
        let Some(weight) = self.weight()? else { return Ok(()) };
        let height = self.height()?;

        let bio = Bio { name, weight, height };
        let bmi = Bmi::of(&bio);

        writeln!(self.output, "{} your BMI is {}", bio.name, bmi)?;

        if let Some(category) = bmi.category() {
            writeln!(self.output, "{category}")?;
        }

        Ok(())
    }

    fn name(&mut self) -> Result<Option<Name>, Error> {
        let mut attempts = ATTEMPTS;

        loop {
            let line = self.prompt("What is your name: ")?;

            match line.parse() {
                Ok(name) => {
                    writeln!(self.output, "Welcome {name}")?;
                    return Ok(Some(name));
                }
                Err(_) => {
                    attempts -= 1;
                    warn!("Rejected name entry {line:?}, {attempts} attempts left");

                    writeln!(self.output, "WARNING: Only letters, no numbers or special characters. You have {attempts} left.")?;

                    if attempts == 0 {
                        writeln!(self.output, "You have exceeded the amount of attempts. Goodbye!")?;
                        return Ok(None);
                    }
                }
            }
        }
    }

    fn weight(&mut self) -> Result<Option<Weight>, Error> {
        let mut attempts = ATTEMPTS;

        loop {
            let line = self.prompt("What is your weight in lbs: ")?;

            match line.parse::<Weight>() {
                Ok(weight) => {
                    debug!("Accepted weight of {} lbs", *weight);
                    return Ok(Some(weight));
                }
                Err(e) => {
                    attempts -= 1;
                    warn!("Rejected weight entry {line:?}, {attempts} attempts left");

                    writeln!(self.output, "{e}")?;

                    if attempts == 0 {
                        writeln!(self.output, "You have exceeded the amount of attempts. Goodbye!")?;
                        return Ok(None);
                    }
                }
            }
        }
    }

    fn height(&mut self) -> Result<Height, Error> {
        let line = self.prompt("What is you height: ")?;
        let height = line.parse::<Height>()?;

        debug!("Accepted height of {} inches", *height);

        writeln!(self.output, "{height}")?;

        Ok(height)
    }

    fn prompt(&mut self, text: &str) -> Result<String, Error> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }

        while line.ends_with(['\n', '\r']) {
            line.pop();
        }

        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<(), Error>, String) {
        let mut output = Vec::new();
        let result = Session::new(Cursor::new(input), &mut output).run();

        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn full_session() {
        let (result, output) = run("Bob\n150\n5 10\n");

        assert!(result.is_ok());
        assert!(output.contains("Welcome Bob"));
        assert!(output.contains("61 inches in height"));
        assert!(output.contains("Bob your BMI is 28.3"));
        assert!(output.contains("You are overweight"));
    }

    #[test]
    fn name_accepted_on_first_attempt() {
        let (result, output) = run("Ada\n120\n5 4\n");

        assert!(result.is_ok());
        assert!(output.contains("Welcome Ada"));
        assert!(!output.contains("WARNING"));
    }

    #[test]
    fn name_attempts_exhausted() {
        let (result, output) = run("B0b\nB0b!\n\n");

        assert!(result.is_ok());
        assert!(output.contains("You have 2 left."));
        assert!(output.contains("You have 1 left."));
        assert!(output.contains("You have 0 left."));
        assert!(output.contains("You have exceeded the amount of attempts. Goodbye!"));
        assert!(!output.contains("weight in lbs"), "kept prompting after goodbye");
    }

    #[test]
    fn invalid_weight_is_reprompted() {
        let (result, output) = run("Bob\n150a\n150\n5 10\n");

        assert!(result.is_ok());
        assert!(output.contains("Invalid entry."));
        assert!(output.contains("Bob your BMI is 28.3"));
    }

    #[test]
    fn weight_attempts_exhausted() {
        let (result, output) = run("Bob\nheavy\nlbs\n?\n");

        assert!(result.is_ok());
        assert_eq!(output.matches("Invalid entry.").count(), 3);
        assert!(output.contains("You have exceeded the amount of attempts. Goodbye!"));
        assert!(!output.contains("you height"), "kept prompting after goodbye");
    }

    #[test]
    fn short_height_fails_with_digit_count() {
        let (result, output) = run("Bob\n150\n5\n");

        assert!(matches!(result, Err(Error::Digits { expected: 2, found: 1 })));
        assert!(!output.contains("BMI"));
    }

    #[test]
    fn zero_height_fails_instead_of_dividing() {
        let (result, output) = run("Bob\n150\n0 0\n");

        assert!(matches!(result, Err(Error::Zero)));
        assert!(!output.contains("BMI"));
        assert!(!output.contains("inf"));
    }

    #[test]
    fn end_of_input_surfaces_as_error() {
        let (result, _) = run("");

        assert!(matches!(result, Err(Error::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
