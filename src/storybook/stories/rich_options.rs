use color_eyre::eyre::Result;

use super::{builder, catalogue, AutocompleteStory};
use crate::storybook::{components::ActionLog, config::Config};

const MAX_NUMBER_OF_OPTIONS: usize = 4;

const DESCRIPTION: &str = "Options can be records: the value is what gets filtered and \
    reported, children is what gets drawn, and extra attributes (fg, description) style \
    each row. At most four suggestions are shown.";

pub fn story(config: &Config) -> Result<AutocompleteStory> {
    let actions = ActionLog::new(config.theme.footer());

    let autocomplete = builder(config, catalogue::rich_fruit(), &actions)
        .on_input_value_change(actions.recorder("onInputValueChange"))
        .max_number_of_options(MAX_NUMBER_OF_OPTIONS)
        .attribute("id", "rich-fruit")
        .attribute("label", "Fruit, with details")
        .build()?;

    Ok(AutocompleteStory::new(
        "rich-options",
        "Rich options",
        DESCRIPTION,
        autocomplete,
        actions,
    ))
}

#[cfg(test)]
mod tests {
    use tuggest::events::Key;

    use super::*;
    use crate::storybook::story::Story;

    #[tokio::test]
    async fn test_rows_show_children_and_report_value() {
        let mut story = story(&Config::default()).unwrap();
        story.set_visible().await.unwrap();
        story.update(Key::Down).await.unwrap();

        let rows = story.autocomplete().rendered_suggestions();
        assert_eq!(rows.len(), MAX_NUMBER_OF_OPTIONS);
        assert_eq!(rows[0].key, "apple");
        assert_eq!(rows[0].text, "🍎 Apple");
        assert_eq!(rows[0].attributes.get("fg").map(String::as_str), Some("red"));

        story.update(Key::Enter).await.unwrap();
        let change = &story.actions().actions()[0];
        assert_eq!(change.name, "onChange");
        assert_eq!(change.detail.as_deref(), Some("apple"));
        assert_eq!(story.autocomplete().input_value(), "🍎 Apple");
    }
}
