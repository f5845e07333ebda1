use blockforge_model::{BlockDefinition, FieldDef};
use serde_json::json;

use crate::{keep_props, object};

pub const FAQ_CENTERED_CARDS: &str = "faq.centered-cards";

pub(crate) fn definition() -> BlockDefinition {
    BlockDefinition::new(FAQ_CENTERED_CARDS, "FAQ Centered Cards", 1)
        .with_defaults(object(json!({
            "title": "Frequently Asked Questions",
            "faqs": [
                {
                    "_id": "_id1",
                    "question": "Can I cancel at anytime?",
                    "answer": "Yes, you can cancel anytime. We would appreciate some feedback when you do."
                },
                {
                    "_id": "_id2",
                    "question": "My team has credits. How do we use them?",
                    "answer": "Credits apply automatically once your team signs up for a subscription plan."
                },
                {
                    "_id": "_id3",
                    "question": "How does pricing work?",
                    "answer": "Subscriptions are tiered by team size and usage."
                },
                {
                    "_id": "_id4",
                    "question": "How secure is my data?",
                    "answer": "Protecting the data you trust to us is our first priority."
                },
                {
                    "_id": "_id5",
                    "question": "Do you offer discounts?",
                    "answer": "Every tier includes discounts for teams."
                },
                {
                    "_id": "_id6",
                    "question": "What is your refund policy?",
                    "answer": "We offer refunds on unused months of any plan."
                }
            ]
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title")
                .required()
                .placeholder("Frequently Asked Questions"),
            FieldDef::array(
                "faqs",
                "FAQs",
                vec![
                    FieldDef::string("question", "Question")
                        .required()
                        .placeholder("Enter question"),
                    FieldDef::text("answer", "Answer").required().placeholder("Enter answer"),
                ],
            ),
        ])
        .with_migration(keep_props)
}
