use blockforge_model::{BlockDefinition, FieldDef, Props, PropsValidator, ValidationError, ValidationIssue};
use serde_json::{Value, json};

use crate::{keep_props, object};

pub const PRICING_CARDS_TOGGLE: &str = "pricing.cards-toggle";

fn plan(id: &str, name: &str, price: Value, annual: Option<u32>, description: &str, features: &[&str]) -> Value {
    let mut plan = json!({
        "_id": id,
        "name": name,
        "price": price,
        "description": description,
        "features": features,
        "ctaText": "Sign up",
        "ctaHref": "#",
        "isPopular": false
    });
    if let Some(annual) = annual {
        plan["priceAnnual"] = json!(annual);
    }
    plan
}

pub(crate) fn definition() -> BlockDefinition {
    let mut startup = plan(
        "_id2",
        "Startup",
        json!(39),
        Some(29),
        "All the basics for starting a new business",
        &["2 users", "Plan features", "Product support", "Unlimited products", "Advanced analytics"],
    );
    startup["isPopular"] = json!(true);
    let mut enterprise = plan(
        "_id4",
        "Enterprise",
        json!("Contact us"),
        None,
        "Advanced features for scaling your business",
        &[
            "Unlimited users",
            "Plan features",
            "Product support",
            "Unlimited products",
            "Advanced analytics",
            "Dedicated support",
            "Custom integrations",
        ],
    );
    enterprise["ctaText"] = json!("Contact us");

    BlockDefinition::new(PRICING_CARDS_TOGGLE, "Pricing Cards with Toggle", 1)
        .with_defaults(object(json!({
            "title": "Pricing",
            "description": "Choose the plan that works best for you",
            "monthlyLabel": "Monthly",
            "annualLabel": "Annual",
            "annualSavings": "Save up to 10%",
            "plans": [
                plan(
                    "_id1",
                    "Free",
                    json!(0),
                    Some(0),
                    "Forever free",
                    &["1 user", "Plan features", "Product support"]
                ),
                startup,
                plan(
                    "_id3",
                    "Team",
                    json!(89),
                    Some(79),
                    "Everything you need for a growing business",
                    &[
                        "5 users",
                        "Plan features",
                        "Product support",
                        "Unlimited products",
                        "Advanced analytics",
                        "Priority support"
                    ]
                ),
                enterprise
            ]
        })))
        .with_ui(vec![
            FieldDef::string("title", "Title").required().placeholder("Pricing"),
            FieldDef::text("description", "Description").placeholder("Choose the plan that works best for you"),
            FieldDef::string("monthlyLabel", "Monthly Label").placeholder("Monthly"),
            FieldDef::string("annualLabel", "Annual Label").placeholder("Annual"),
            FieldDef::string("annualSavings", "Annual Savings Text")
                .placeholder("Save up to 10%")
                .helper_text("Optional badge text shown next to annual toggle"),
            FieldDef::array(
                "plans",
                "Pricing Plans",
                vec![
                    FieldDef::string("name", "Plan Name").required().placeholder("Startup"),
                    FieldDef::string("price", "Monthly Price")
                        .required()
                        .placeholder("39 or \"Contact us\"")
                        .helper_text("Number or text like \"Contact us\""),
                    FieldDef::number("priceAnnual", "Annual Price")
                        .placeholder("29")
                        .helper_text("Optional annual pricing"),
                    FieldDef::string("description", "Description")
                        .required()
                        .placeholder("All the basics for starting a new business"),
                    FieldDef::text("features", "Features (one per line)")
                        .required()
                        .helper_text("Enter features separated by newlines"),
                    FieldDef::string("ctaText", "CTA Button Text").required().placeholder("Sign up"),
                    FieldDef::string("ctaHref", "CTA Button Link").required().placeholder("#"),
                    FieldDef::boolean("isPopular", "Mark as Popular").helper_text("Highlights this plan"),
                ],
            ),
        ])
        .with_validator(PricingValidator)
        .with_migration(keep_props)
}

/// Checks pricing props against their stored shape rather than the editor
/// manifest: `price` may be a number or a label like "Contact us", and
/// `features` is a list of strings the editor shows one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingValidator;

impl PropsValidator for PricingValidator {
    fn validate(&self, props: &Props) -> Result<Props, ValidationError> {
        let mut issues = Vec::new();
        for key in ["title", "description", "monthlyLabel", "annualLabel", "annualSavings"] {
            optional(&mut issues, key, props.get(key), Value::is_string, "a string");
        }
        match props.get("plans") {
            None | Some(Value::Null) => {}
            Some(Value::Array(plans)) => {
                for (i, plan) in plans.iter().enumerate() {
                    check_plan(&mut issues, &format!("plans[{i}]"), plan);
                }
            }
            Some(_) => issues.push(issue("plans", "must be an array")),
        }
        if issues.is_empty() {
            Ok(props.clone())
        } else {
            Err(ValidationError { issues })
        }
    }
}

fn check_plan(issues: &mut Vec<ValidationIssue>, path: &str, plan: &Value) {
    let Some(plan) = plan.as_object() else {
        issues.push(issue(path, "must be an object"));
        return;
    };
    for key in ["name", "description", "ctaText", "ctaHref"] {
        required(issues, &format!("{path}.{key}"), plan.get(key), Value::is_string, "a string");
    }
    required(
        issues,
        &format!("{path}.price"),
        plan.get("price"),
        |v| v.is_number() || v.is_string(),
        "a number or a string",
    );
    optional(issues, &format!("{path}.priceAnnual"), plan.get("priceAnnual"), Value::is_number, "a number");
    optional(issues, &format!("{path}.isPopular"), plan.get("isPopular"), Value::is_boolean, "a boolean");
    match plan.get("features") {
        None | Some(Value::Null) => {}
        Some(Value::Array(features)) => {
            for (i, feature) in features.iter().enumerate() {
                if !feature.is_string() {
                    issues.push(issue(&format!("{path}.features[{i}]"), "must be a string"));
                }
            }
        }
        Some(_) => issues.push(issue(&format!("{path}.features"), "must be an array of strings")),
    }
}

fn required(
    issues: &mut Vec<ValidationIssue>,
    path: &str,
    value: Option<&Value>,
    accepts: impl Fn(&Value) -> bool,
    expected: &str,
) {
    match value {
        None | Some(Value::Null) => issues.push(issue(path, "is required")),
        Some(value) if !accepts(value) => issues.push(issue(path, &format!("must be {expected}"))),
        Some(_) => {}
    }
}

fn optional(
    issues: &mut Vec<ValidationIssue>,
    path: &str,
    value: Option<&Value>,
    accepts: impl Fn(&Value) -> bool,
    expected: &str,
) {
    if let Some(value) = value.filter(|v| !v.is_null() && !accepts(*v)) {
        issues.push(issue(path, &format!("must be {expected}")));
    }
}

fn issue(path: &str, message: &str) -> ValidationIssue {
    ValidationIssue {
        path: path.to_string(),
        message: message.to_string(),
    }
}
