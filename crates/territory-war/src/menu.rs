//! Menu interativo: lê a escolha, coleta os campos e despacha para o repositório.

use crate::backend::{NewTerritory, TerritoryError, TerritoryRepository, TerritoryUpdate};
use crate::input::{int_or_zero, parse_leading_int, prompt, read_line};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid option.")]
    InvalidChoice { input: String },
}

/// Opções do menu principal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    List,
    Find,
    Edit,
    Remove,
    Exit,
}

impl MenuChoice {
    pub fn parse(line: &str) -> Result<Self, MenuError> {
        match parse_leading_int(line) {
            Some(1) => Ok(MenuChoice::Register),
            Some(2) => Ok(MenuChoice::List),
            Some(3) => Ok(MenuChoice::Find),
            Some(4) => Ok(MenuChoice::Edit),
            Some(5) => Ok(MenuChoice::Remove),
            Some(0) => Ok(MenuChoice::Exit),
            _ => Err(MenuError::InvalidChoice {
                input: line.to_string(),
            }),
        }
    }
}

const MENU: &str = "\n=== Territory War ===\n\
1. Register territory\n\
2. List territories\n\
3. Find territory by name\n\
4. Edit territory\n\
5. Remove territory\n\
0. Exit\n\
Choice: ";

pub struct Menu<'a, S, R, W> {
    store: &'a mut S,
    input: R,
    output: W,
}

impl<'a, S, R, W> Menu<'a, S, R, W>
where
    S: TerritoryRepository,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a mut S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Executa o laço até a opção de saída (ou fim da entrada).
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{MENU}").context("Failed to write menu")?;
            self.output.flush().context("Failed to flush standard output")?;

            let Some(line) = read_line(&mut self.input)? else {
                log::info!("end of input, leaving menu");
                return self.farewell();
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(err) => {
                    let MenuError::InvalidChoice { input } = &err;
                    log::debug!("invalid menu choice {input:?}");
                    self.say(&err.to_string())?;
                    continue;
                }
            };

            // false: a entrada acabou no meio da operação
            let more = match choice {
                MenuChoice::Register => self.register()?,
                MenuChoice::List => self.list()?,
                MenuChoice::Find => self.find()?,
                MenuChoice::Edit => self.edit()?,
                MenuChoice::Remove => self.remove()?,
                MenuChoice::Exit => return self.farewell(),
            };

            if !more {
                log::info!("end of input during {choice:?}, leaving menu");
                return self.farewell();
            }
        }
    }

    fn farewell(&mut self) -> Result<()> {
        self.say("Exiting...")
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to standard output")
    }

    fn ask(&mut self, text: &str) -> Result<Option<String>> {
        prompt(&mut self.input, &mut self.output, text)
    }

    fn report(&mut self, err: TerritoryError) -> Result<bool> {
        self.say(&err.to_string())?;
        Ok(true)
    }

    fn register(&mut self) -> Result<bool> {
        if self.store.is_full() {
            let capacity = self.store.capacity();
            return self.report(TerritoryError::CapacityExceeded { capacity });
        }

        let Some(name) = self.ask("Name: ")? else {
            return Ok(false);
        };
        let Some(area) = self.ask("Area (integer): ")? else {
            return Ok(false);
        };
        let Some(color) = self.ask("Color: ")? else {
            return Ok(false);
        };

        match self.store.create(NewTerritory::new(name, int_or_zero(&area), color)) {
            Ok(territory) => self.say(&format!("Territory registered (id={}).", territory.id))?,
            Err(err) => return self.report(err),
        }
        Ok(true)
    }

    fn list(&mut self) -> Result<bool> {
        if self.store.is_empty() {
            self.say("No territories registered.")?;
            return Ok(true);
        }

        writeln!(self.output, "Territory list ({}):", self.store.len())
            .context("Failed to write to standard output")?;
        for territory in self.store.list() {
            writeln!(self.output, "{territory}").context("Failed to write to standard output")?;
        }
        Ok(true)
    }

    fn find(&mut self) -> Result<bool> {
        let Some(query) = self.ask("Name to search: ")? else {
            return Ok(false);
        };

        let message = match self.store.get_by_name(&query) {
            Ok(territory) => format!("Found: {territory}"),
            Err(err) => err.to_string(),
        };
        self.say(&message)?;
        Ok(true)
    }

    fn edit(&mut self) -> Result<bool> {
        let Some(query) = self.ask("Name of territory to edit: ")? else {
            return Ok(false);
        };

        let current = match self.store.get_by_name(&query) {
            Ok(territory) => territory.clone(),
            Err(err) => return self.report(err),
        };
        self.say(&format!("Editing territory [{}] {}", current.id, current.name))?;

        // linha vazia mantém o valor atual
        let Some(name) = self.ask(&format!("New name (press enter to keep: {}): ", current.name))? else {
            return Ok(false);
        };
        let Some(area) = self.ask(&format!("New area (press enter to keep: {}): ", current.area))? else {
            return Ok(false);
        };
        let Some(color) = self.ask(&format!("New color (press enter to keep: {}): ", current.color))? else {
            return Ok(false);
        };

        let update = TerritoryUpdate {
            name: Some(name).filter(|n| !n.is_empty()),
            area: Some(area).filter(|a| !a.is_empty()).map(|a| int_or_zero(&a)),
            color: Some(color).filter(|c| !c.is_empty()),
        };
        match self.store.update(&query, update) {
            Ok(_) => self.say("Territory updated.")?,
            Err(err) => return self.report(err),
        }
        Ok(true)
    }

    fn remove(&mut self) -> Result<bool> {
        let Some(query) = self.ask("Name of territory to remove: ")? else {
            return Ok(false);
        };

        match self.store.delete(&query) {
            Ok(_) => self.say(&format!("Territory '{query}' removed."))?,
            Err(err) => return self.report(err),
        }
        Ok(true)
    }
}
