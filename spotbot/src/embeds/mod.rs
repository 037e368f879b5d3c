use twilight_model::channel::message::Embed;

pub use self::{lookup::LookupEmbed, sightings::SightingsEmbed, status::StatusEmbed};

mod lookup;
mod sightings;
mod status;

pub trait EmbedData {
    fn build(self) -> Embed;
}

/// Cut off the content so that it fits into `max_len` characters.
pub fn truncate(mut content: String, max_len: usize) -> String {
    if let Some((idx, _)) = content.char_indices().nth(max_len) {
        let cut = content[..idx]
            .char_indices()
            .next_back()
            .map_or(0, |(idx, _)| idx);

        content.truncate(cut);
        content.push('…');
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_long_content() {
        assert_eq!(truncate("abcdef".to_owned(), 6), "abcdef");
        assert_eq!(truncate("abcdefg".to_owned(), 6), "abcde…");
        assert_eq!(truncate("ééééééé".to_owned(), 3), "éé…");
    }
}
