//! LLM prompt construction for the four extraction call sites
//!
//! Each builder asks for exactly the JSON shape its schema binds, and
//! ends with the only-JSON reminder. The pipeline in this crate is what
//! recovers the reply when the model ignores that reminder.

use gleaner_domain::Record;

/// Build the prompt that asks for interview questions
///
/// `resume` and `jd` are records bound against the resume-fields and
/// jd-fields schemas; missing fields simply render empty.
pub fn build_question_prompt(resume: &Record, jd: &Record, raw_resume_text: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "Generate 10 targeted interview questions from the following resume \
         and job description.\n\n",
    );

    prompt.push_str("==== Resume ====\n");
    prompt.push_str(&format!("Name: {}\n", resume.text("name").unwrap_or("")));
    prompt.push_str(&format!("Skills: {}\n", join_list(resume, "skills")));
    prompt.push_str(&format!("Education: {}\n", join_list(resume, "education")));
    prompt.push_str(&format!("Experience: {}\n", join_list(resume, "experience")));
    prompt.push_str(&format!("Full text: {}\n\n", raw_resume_text));

    prompt.push_str("==== Job description ====\n");
    push_jd(&mut prompt, jd);

    prompt.push_str(
        "\nCover these areas:\n\
         1. Technical skill verification (3 questions)\n\
         2. Work experience (3 questions)\n\
         3. Personal strengths and teamwork (2 questions)\n\
         4. Career plans (2 questions)\n\n",
    );

    prompt.push_str(QUESTION_FORMAT);
    prompt.push_str(ONLY_JSON_REMINDER);
    prompt
}

/// Build the prompt that asks for an answer evaluation
pub fn build_evaluation_prompt(
    question_content: &str,
    question_category: &str,
    answer: &str,
    jd: &Record,
) -> String {
    let mut prompt = String::new();

    prompt.push_str("Evaluate the following interview answer.\n\n");

    prompt.push_str("==== Question ====\n");
    prompt.push_str(&format!("Question: {}\n", question_content));
    prompt.push_str(&format!("Category: {}\n\n", question_category));

    prompt.push_str("==== Candidate answer ====\n");
    prompt.push_str(answer);
    prompt.push_str("\n\n==== Position ====\n");
    push_jd(&mut prompt, jd);

    prompt.push('\n');
    prompt.push_str(EVALUATION_FORMAT);
    prompt.push_str(
        "\nScoring guide:\n\
         1-3: misses the basic requirements, vague or wrong\n\
         4-6: meets the requirements but lacks depth or detail\n\
         7-8: good answer showing professional knowledge and experience\n\
         9-10: excellent answer, thorough, deep, and insightful\n",
    );
    prompt
}

/// Build the prompt that asks for structured resume fields
pub fn build_resume_parse_prompt(text: &str) -> String {
    format!(
        "Extract the key information from the following resume text.\n\n\
         ==== Resume text ====\n{}\n\n\
         Extract these fields (use an empty string or empty array when \
         the information is unavailable):\n\
         1. Name\n\
         2. Email address\n\
         3. Phone number\n\
         4. Education history (school, degree, major, period)\n\
         5. Work experience (company, title, period, responsibilities)\n\
         6. Skill list\n\n{}{}",
        text, RESUME_FORMAT, ONLY_JSON_REMINDER
    )
}

/// Build the prompt that asks for structured job-description fields
pub fn build_jd_parse_prompt(text: &str) -> String {
    format!(
        "Extract the key information from the following job description.\n\n\
         ==== Job description text ====\n{}\n\n\
         Extract these fields (use an empty string or empty array when \
         the information is unavailable):\n\
         1. Position title\n\
         2. Company name\n\
         3. Description summary\n\
         4. Requirement list\n\n{}{}",
        text, JD_FORMAT, ONLY_JSON_REMINDER
    )
}

fn push_jd(prompt: &mut String, jd: &Record) {
    prompt.push_str(&format!("Title: {}\n", jd.text("title").unwrap_or("")));
    prompt.push_str(&format!("Company: {}\n", jd.text("company").unwrap_or("")));
    prompt.push_str(&format!(
        "Description: {}\n",
        jd.text("description").unwrap_or("")
    ));
    prompt.push_str(&format!("Requirements: {}\n", join_list(jd, "requirements")));
}

fn join_list(record: &Record, key: &str) -> String {
    record.text_list(key).unwrap_or(&[]).join(", ")
}

const QUESTION_FORMAT: &str = r#"Return JSON in this format:
{
  "questions": [
    {
      "id": 1,
      "content": "question text",
      "category": "question category"
    }
  ]
}
"#;

const EVALUATION_FORMAT: &str = r#"Return the score and feedback as JSON in this format:
{
  "score": 7,
  "feedback": "your assessment...",
  "suggestions": "how to improve..."
}
"#;

const RESUME_FORMAT: &str = r#"Return JSON in this format:
{
  "name": "name",
  "email": "email address",
  "phone": "phone number",
  "education": ["entry 1", "entry 2"],
  "experience": ["entry 1", "entry 2"],
  "skills": ["skill 1", "skill 2"]
}
"#;

const JD_FORMAT: &str = r#"Return JSON in this format:
{
  "title": "position title",
  "company": "company name",
  "description": "description summary",
  "requirements": ["requirement 1", "requirement 2"]
}
"#;

const ONLY_JSON_REMINDER: &str =
    "\nReturn ONLY the JSON, with no extra explanation or decoration.\n";
