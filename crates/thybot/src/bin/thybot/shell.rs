//! Interactive terminal front end.
use std::{
    fmt::Display,
    io::Write as _,
    path::Path,
    str::FromStr,
};

use anyhow::Context as _;
use thybot::{
    assistant::ThyBot,
    generic::GenericMessage,
    provider::ChatCompletionProvider,
    session::Session,
    types::{
        outputs::{ChatTurn, TurnSource},
        profile::ProfileForm,
    },
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::commands::{HELP, ShellCommand};

const MAX_LISTED_DISHES: usize = 30;

pub struct Shell<B> {
    bot: ThyBot<B>,
    session: Session,
    input: Lines<BufReader<Stdin>>,
}

impl<B> Shell<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(bot: ThyBot<B>) -> Self {
        Self {
            bot,
            session: Session::new(),
            input: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        println!("ThyBot – your thyroid health assistant. Type /help for commands.");

        while let Some(line) = self.prompt("you> ").await? {
            match ShellCommand::parse(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.handle(command).await?,
                Err(usage) => println!("{usage}"),
            }
        }

        println!("Goodbye.");
        Ok(())
    }

    async fn handle(&mut self, command: ShellCommand) -> anyhow::Result<()> {
        match command {
            ShellCommand::Empty | ShellCommand::Quit => {}
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Chat(question) => {
                let turn = self.bot.chat(&mut self.session, &question).await;
                print_turn(&turn);
            }
            ShellCommand::Profile => self.edit_profile().await?,
            ShellCommand::Show => self.show_profile(),
            ShellCommand::Style(style) => {
                self.session.style = style;
                println!("Response style set to {style}.");
            }
            ShellCommand::Clear => {
                self.session.clear_general_chat();
                println!("Chat history cleared.");
            }
            ShellCommand::Upload(path) => self.upload(&path).await,
            ShellCommand::Ask(question) => {
                match self.bot.ask_document(&mut self.session, &question).await {
                    Some(turn) => print_turn(&turn),
                    None => println!("Upload a file to start the document chat (/upload <path>)."),
                }
            }
            ShellCommand::End => match self.session.end_document_chat() {
                Some(chat) => println!("Document chat with {} ended.", chat.file_name()),
                None => println!("No document chat is active."),
            },
            ShellCommand::MealAdd(dish) => {
                let known = self.bot.nutrition().lookup(&dish).is_some();
                if self.session.meal.add(&dish) {
                    if !known {
                        println!("Note: {dish} is not in the nutrition table.");
                    }
                    self.list_meal();
                } else {
                    println!("{dish} is already in the meal.");
                }
            }
            ShellCommand::MealRemove(position) => {
                match self.session.meal.remove(position - 1) {
                    Some(dish) => println!("Removed {dish}."),
                    None => println!("There is no item {position}."),
                }
            }
            ShellCommand::MealList => self.list_meal(),
            ShellCommand::MealClear => {
                self.session.clear_meal();
                println!("Meal cleared.");
            }
            ShellCommand::MealDishes(filter) => self.list_dishes(filter.as_deref()),
            ShellCommand::MealAnalyze => self.analyze_meal().await,
        }
        Ok(())
    }

    async fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        print!("{label}");
        std::io::stdout().flush()?;
        Ok(self.input.next_line().await?)
    }

    /// Ask for one value until it parses. Empty input keeps `current`.
    async fn ask<T>(&mut self, label: &str, current: Option<T>) -> anyhow::Result<Option<T>>
    where
        T: FromStr + Display,
    {
        loop {
            let hint = current
                .as_ref()
                .map(|c| format!(" [{c}]"))
                .unwrap_or_default();
            let Some(line) = self.prompt(&format!("  {label}{hint}: ")).await? else {
                return Ok(None);
            };

            let line = line.trim();
            if line.is_empty() {
                if current.is_some() {
                    return Ok(current);
                }
                println!("  A value is required.");
                continue;
            }
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("  Could not understand `{line}`."),
            }
        }
    }

    async fn edit_profile(&mut self) -> anyhow::Result<()> {
        let old = self.session.profile().map(|p| p.to_form());
        let old = old.as_ref();
        println!("Enter the patient's details (press Enter to keep the value in brackets).");

        let Some(name) = self.ask("Full name", old.map(|f| f.name.clone())).await? else {
            return Ok(());
        };
        let Some(age) = self.ask("Age", old.map(|f| f.age)).await? else {
            return Ok(());
        };
        let Some(gender) = self
            .ask("Gender (female/male/other)", old.map(|f| f.gender))
            .await?
        else {
            return Ok(());
        };
        let Some(weight_kg) = self.ask("Weight (kg)", old.map(|f| f.weight_kg)).await? else {
            return Ok(());
        };
        let Some(height_cm) = self.ask("Height (cm)", old.map(|f| f.height_cm)).await? else {
            return Ok(());
        };
        let Some(tsh) = self.ask("TSH (mIU/L)", old.map(|f| f.tsh)).await? else {
            return Ok(());
        };
        let Some(t3) = self.ask("Free T3 (pg/mL)", old.map(|f| f.t3)).await? else {
            return Ok(());
        };
        let Some(t4) = self.ask("Free T4 (ng/dL)", old.map(|f| f.t4)).await? else {
            return Ok(());
        };

        let profile = self.session.save_profile(ProfileForm {
            name,
            age,
            gender,
            weight_kg,
            height_cm,
            tsh,
            t3,
            t4,
        });
        println!("✅ Profile for **{}** saved!", profile.name);
        self.show_profile();
        Ok(())
    }

    fn show_profile(&self) {
        let Some(p) = self.session.profile() else {
            println!("No profile yet. Use /profile to create one.");
            return;
        };
        println!("#### {}", p.name);
        println!(
            "**Age:** {} | **Gender:** {} | **BMI:** {:.2}",
            p.age, p.gender, p.bmi
        );
        println!("Thyroid Status: {}", p.thyroid_status);
        println!(
            "TSH (mIU/L): {:.2} | Free T3 (pg/mL): {:.2} | Free T4 (ng/dL): {:.2}",
            p.tsh, p.t3, p.t4
        );
    }

    async fn upload(&mut self, path: &Path) {
        let result = async {
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("could not read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let chat = self.bot.upload(&mut self.session, &file_name, &bytes).await?;
            anyhow::Ok((chat.chunk_count(), chat.conversation().last().cloned()))
        }
        .await;

        match result {
            Ok((chunks, greeting)) => {
                tracing::info!(chunks, "document ready");
                if let Some(greeting) = greeting {
                    println!("thybot> {}", greeting.content);
                }
            }
            Err(e) => println!("⚠️ {e:#}"),
        }
    }

    fn list_meal(&self) {
        if self.session.meal.is_empty() {
            println!("No items added yet.");
            return;
        }
        println!("#### Your Current Meal");
        for (i, dish) in self.session.meal.items().iter().enumerate() {
            println!("  {}. {dish}", i + 1);
        }
    }

    fn list_dishes(&self, filter: Option<&str>) {
        let filter = filter.map(str::to_lowercase);
        let names: Vec<&str> = self
            .bot
            .nutrition()
            .dish_names()
            .into_iter()
            .filter(|name| {
                filter
                    .as_deref()
                    .is_none_or(|f| name.to_lowercase().contains(f))
            })
            .collect();

        if names.is_empty() {
            println!("No matching dishes.");
            return;
        }
        for name in names.iter().take(MAX_LISTED_DISHES) {
            println!("  {name}");
        }
        if names.len() > MAX_LISTED_DISHES {
            println!("  … and {} more", names.len() - MAX_LISTED_DISHES);
        }
    }

    async fn analyze_meal(&self) {
        if let Some(profile) = self.session.profile() {
            println!("Analyzing meals for a patient with: **{}**", profile.thyroid_status);
        }
        match self.bot.analyze_meal(&self.session).await {
            Ok(results) => {
                for item in results {
                    println!();
                    println!("── Analysis for: **{}**", item.dish);
                    if let Some(line) = item.summary_line() {
                        println!("{line}");
                    }
                    println!("{}", item.analysis);
                }
            }
            Err(e) => println!("⚠️ {e}"),
        }
    }
}

fn print_turn(turn: &ChatTurn) {
    match turn.source {
        TurnSource::WebSearch => println!("thybot (from the web)> {}", turn.text),
        _ => println!("thybot> {}", turn.text),
    }
}
