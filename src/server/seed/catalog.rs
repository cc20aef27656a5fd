//! Demo catalog of books, all described in English.

use entity::sea_orm_active_enums::ItemField;

use crate::server::model::item::NewItem;

const LOCALE: &str = "en";

/// All demo books in seeding order.
pub fn demo_catalog() -> Vec<NewItem> {
    vec![
        book_cryptonomicon(),
        book_provence(),
        book_plumbing(),
        book_quantum_thief(),
        book_complete_works(),
    ]
}

/// A Year In Provence by Peter Mayle.
pub fn book_provence() -> NewItem {
    book(
        "0140296034",
        "A Year In Provence",
        "Peter Mayle",
        "Enjoy an irresistible feast of humour and discover the joys of French rural living with Peter Mayle's bestselling, much-loved account of 'A Year In Provence'.",
        "/mbm/images/catalog/items/1/thumbnail1.png",
    )
}

/// Plumbing and Central Heating by Mike Lawrence.
pub fn book_plumbing() -> NewItem {
    book(
        "186126173X",
        "Plumbing and Central Heating",
        "Mike Lawrence",
        "This guide begins with the basic skills of plumbing, which once mastered, can be applied to any situation, from mending a leaking tap to installing a new shower unit.",
        "/mbm/images/catalog/items/3/thumbnail3.png",
    )
}

/// The Quantum Thief by Hannu Rajaniemi, the only book with a GTIN.
pub fn book_quantum_thief() -> NewItem {
    const DESCRIPTION: &str = concat!(
        "<p>The Quantum Thief is a dazzling hard SF novel set in the solar system of the far future - a heist novel peopled by bizarre post-humans but powered by very human motives of betrayal, revenge and jealousy. It is a stunning debut.</p><br/>",
        "<p>Jean le Flambeur is a post-human criminal, mind burglar, confidence artist and trickster. His origins are shrouded in mystery, but his exploits are known throughout the Heterarchy - from breaking into the vast Zeusbrains of the Inner System to steal their thoughts, to stealing rare Earth antiques from the aristocrats of the Moving Cities of Mars.</p>",
        "<p>Except that Jean made one mistake. Now he is condemned to play endless variations of a game-theoretic riddle in the vast virtual jail of the Axelrod Archons - the Dilemma Prison - against countless copies of himself.</p>",
        "<p>Jean's routine of death, defection and cooperation is upset by the arrival of Mieli and her spidership, Perhonen. She offers him a chance to win back his freedom and the powers of his old self - in exchange for finishing the one heist he never quite managed...</p>",
    );

    book(
        "0575088893",
        "The Quantum Thief",
        "Hannu Rajaniemi",
        "The most exciting SF debut of the last five years - a star to stand alongside Alistair Reynolds and Richard Morgan.",
        "/mbm/images/catalog/items/4/thumbnail4.png",
    )
    .with_gtin("978-0575088894")
    .with_primary_field_detail(ItemField::Publisher, "Gollancz (1 Nov 2011)", LOCALE)
    .with_primary_field_detail(ItemField::Format, "Paperback", LOCALE)
    .with_primary_field_detail(ItemField::PageCount, "336", LOCALE)
    .with_primary_field_detail(ItemField::Description, DESCRIPTION, LOCALE)
    .with_primary_field_detail(ItemField::Genre, "Sci-Fi", LOCALE)
    .with_primary_field_detail(ItemField::Size, "12.9 x 2.1 x 19.6 cm", LOCALE)
}

/// The Complete Works of Emily Dickinson.
pub fn book_complete_works() -> NewItem {
    book(
        "0316184136",
        "The Complete Works of Emily Dickinson",
        "Emily Dickinson, edited by Thomas H Johnson",
        "The Complete Poems of Emily Dickinson is the only one-volume edition containing all Emily Dickinson's poems.",
        "/mbm/images/catalog/items/5/thumbnail5.png",
    )
}

/// Cryptonomicon by Neal Stephenson.
pub fn book_cryptonomicon() -> NewItem {
    book(
        "0099410672",
        "Cryptonomicon",
        "Neal Stephenson",
        "'A brilliant patchwork of code-breaking mathematicians and their descendants who are striving to create a data haven in the Philippines...trust me on this one' Guardian",
        "/mbm/images/catalog/items/2/thumbnail2.png",
    )
}

fn book(sku: &str, title: &str, author: &str, summary: &str, thumbnail_uri: &str) -> NewItem {
    NewItem::new(sku)
        .with_primary_field_detail(ItemField::Title, title, LOCALE)
        .with_primary_field_detail(ItemField::Author, author, LOCALE)
        .with_primary_field_detail(ItemField::Summary, summary, LOCALE)
        .with_primary_field_detail(ItemField::ImageThumbnailUri, thumbnail_uri, LOCALE)
}
