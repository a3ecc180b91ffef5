//! `user` subcommands: the random-user fetcher.

use crate::args::UserCommand;
use listdeck_core::remote::{FAILURE_MESSAGE, LOADING_MESSAGE};
use listdeck_core::{AppConfig, FetchOutcome, RandomUserClient, RandomUserWidget, UserCard};
use log::error;
use std::process::ExitCode;

pub fn run(command: UserCommand, config: &AppConfig) -> ExitCode {
    match command {
        UserCommand::Fetch => fetch(config),
    }
    ExitCode::SUCCESS
}

fn fetch(config: &AppConfig) {
    println!("{LOADING_MESSAGE}");

    let endpoint = config.remote.endpoint.as_str();
    let client = match RandomUserClient::new(endpoint, config.remote_timeout()) {
        Ok(client) => client,
        Err(err) => {
            error!("event=user_client_build module=cli status=error error={err}");
            println!("{FAILURE_MESSAGE}");
            return;
        }
    };

    let outcome = RandomUserWidget::new(client).trigger();
    if let FetchOutcome::Loaded(card) = &outcome {
        print!("{}", format_card(card));
    }
    if let Some(message) = outcome.status_message() {
        println!("{message}");
    }
}

fn format_card(card: &UserCard) -> String {
    format!(
        "Name:     {}\nEmail:    {}\nLocation: {}\nAvatar:   {}\n",
        card.full_name, card.email, card.location, card.avatar_url
    )
}

#[cfg(test)]
mod tests {
    use super::format_card;
    use listdeck_core::UserCard;

    #[test]
    fn card_prints_four_fields() {
        let card = UserCard {
            full_name: "Ms Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            location: "London, United Kingdom".to_string(),
            avatar_url: "https://example.com/ada.jpg".to_string(),
        };
        let text = format_card(&card);
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("Name:     Ms Ada Lovelace\n"));
        assert!(text.contains("Location: London, United Kingdom"));
    }
}
