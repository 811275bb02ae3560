//! Prompt templates for the two generation pipelines

use crate::core::answers::Answers;
use crate::core::description::ResearchDescription;

/// Templates for generating prompts for each pipeline
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instructions for clarifying-question generation
    pub fn questions_instructions() -> &'static str {
        r#"You are an assistant for a medical reviewer conducting a systematic literature review in the domain of medical devices.
Based on the following description, generate a list of follow-up questions that will help you better understand the research needs and generate a more accurate PubMed query.
The questions should be clear, concise, and aimed at clarifying the research scope.
Topics are of a high expertise level, so propose very relevant and expert questions to clarify the research scope.
Ask maximum 5 questions, that cannot exceed 30 words each.

Include systematically a question about the body part related to the medical device, if it is relevant.
Among relevant questions, ones that help to understand the PICO (population, intervention, comparison, outcome) can be useful.
Exclude questions about study type and timeframe.
Questions can be addressed directly to the author: "About what type are you interested in?"
Description:
"#
    }

    /// Full prompt for clarifying-question generation
    pub fn clarifying_questions(description: &ResearchDescription) -> String {
        format!(
            "{}{}\nQuestions:",
            Self::questions_instructions(),
            description.content()
        )
    }

    /// Instructions for structured PubMed query generation
    pub fn query_instructions() -> &'static str {
        r#"Generate a PubMed query for a systematic review based on the following description and answers.
The query should be structured as a series of subqueries combined with boolean operators.

Return ONLY a JSON object with the following structure, without any markdown formatting or additional text:
{
    "subqueries": [
        {
            "content": "<terms joined by OR>",
            "operator": "AND"
        },
        {
            "content": "<terms joined by OR>",
            "operator": ""
        }
    ]
}

Example input: Research on diet impact on hypertension
Example output:
{
    "subqueries": [
        {
            "content": "(Hypertension OR high blood pressure OR elevated blood pressure)",
            "operator": "AND"
        },
        {
            "content": "(Diet OR Nutrition OR dietary intervention OR nutritional intervention)",
            "operator": ""
        }
    ]
}"#
    }

    /// Full prompt for structured PubMed query generation
    pub fn pubmed_query(description: &ResearchDescription, answers: &Answers) -> String {
        format!(
            "{}\n\nDescription:\n{}\n\nAnswers:\n{}",
            Self::query_instructions(),
            description.content(),
            answers.to_json()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description() -> ResearchDescription {
        ResearchDescription::try_new("Drug-eluting stents in below-the-knee arteries").unwrap()
    }

    #[test]
    fn test_clarifying_questions_format() {
        let prompt = PromptTemplate::clarifying_questions(&description());
        assert!(prompt.starts_with("You are an assistant for a medical reviewer"));
        assert!(prompt.contains("Ask maximum 5 questions"));
        assert!(prompt.ends_with("Drug-eluting stents in below-the-knee arteries\nQuestions:"));
    }

    #[test]
    fn test_pubmed_query_format() {
        let answers = Answers::new().with_answer("Which body part?", "Lower limb");
        let prompt = PromptTemplate::pubmed_query(&description(), &answers);
        assert!(prompt.contains("Return ONLY a JSON object"));
        assert!(prompt.contains("\"subqueries\""));
        assert!(prompt.contains("\n\nDescription:\nDrug-eluting stents"));
        assert!(prompt.ends_with("Answers:\n{\"Which body part?\":\"Lower limb\"}"));
    }

    #[test]
    fn test_pubmed_query_without_answers() {
        let prompt = PromptTemplate::pubmed_query(&description(), &Answers::new());
        assert!(prompt.ends_with("Answers:\n{}"));
    }
}
