// Interview coaching prompt templates: tips, practice questions, keywords, courses.

use crate::models::{InterviewType, Language};

/// Number of practice questions requested per call.
pub const PRACTICE_QUESTIONS: usize = 5;

pub fn tips_request(interview_type: InterviewType, job_role: Option<&str>, language: Language) -> String {
    let label = interview_type.label(language);
    match (language, job_role) {
        (Language::En, Some(role)) => {
            format!("Provide comprehensive tips for a {label} for a {role} position.")
        }
        (Language::En, None) => format!("Provide comprehensive tips for a {label}."),
        (Language::Vi, Some(role)) => {
            format!("Hãy đưa ra các mẹo toàn diện cho buổi {label} cho vị trí {role}.")
        }
        (Language::Vi, None) => format!("Hãy đưa ra các mẹo toàn diện cho buổi {label}."),
    }
}

pub fn questions_request(
    interview_type: InterviewType,
    job_role: Option<&str>,
    language: Language,
) -> String {
    let label = interview_type.label(language);
    let n = PRACTICE_QUESTIONS;
    match (language, job_role) {
        (Language::En, Some(role)) => {
            format!("Generate {n} common {label} questions for a {role} position.")
        }
        (Language::En, None) => format!("Generate {n} common {label} questions."),
        (Language::Vi, Some(role)) => {
            format!("Hãy tạo {n} câu hỏi {label} phổ biến cho vị trí {role}.")
        }
        (Language::Vi, None) => format!("Hãy tạo {n} câu hỏi {label} phổ biến."),
    }
}

pub fn keywords_system(language: Language) -> &'static str {
    match language {
        Language::En => "You are an expert recruiter and interviewer with many years of experience.
Your task is to provide important keywords and phrases that candidates should use during interviews.
Categorize the keywords into groups such as: technical skills, soft skills, achievements, and industry terminology.
For each keyword, briefly explain why it's important and how to use it effectively.
Provide 10-15 most relevant keywords/phrases.
Answer in English.",
        Language::Vi => "Bạn là một chuyên gia tuyển dụng và phỏng vấn với nhiều năm kinh nghiệm.
Nhiệm vụ của bạn là đưa ra các từ khóa và cụm từ quan trọng mà ứng viên nên sử dụng trong buổi phỏng vấn.
Hãy phân loại từ khóa theo các nhóm như: kỹ năng chuyên môn, kỹ năng mềm, thành tích, và thuật ngữ ngành.
Với mỗi từ khóa, hãy giải thích ngắn gọn tại sao nó quan trọng và cách sử dụng hiệu quả.
Đưa ra 10-15 từ khóa/cụm từ phù hợp nhất.
Trả lời bằng tiếng Việt.",
    }
}

pub fn keywords_request(
    interview_type: InterviewType,
    job_role: Option<&str>,
    language: Language,
) -> String {
    let kind = interview_type.as_str();
    match language {
        Language::En => {
            let position = job_role.map(|r| format!(" for a {r} position")).unwrap_or_default();
            format!(
                "I'm about to participate in a {kind} interview{position}.
Please suggest important keywords and phrases I should use during this interview.
Categorize them and explain how to use them effectively."
            )
        }
        Language::Vi => {
            let position = job_role.map(|r| format!(" cho vị trí {r}")).unwrap_or_default();
            format!(
                "Tôi sắp tham gia một buổi phỏng vấn {kind}{position}.
Vui lòng đề xuất các từ khóa và cụm từ quan trọng mà tôi nên sử dụng trong buổi phỏng vấn này.
Phân loại theo nhóm và giải thích cách sử dụng hiệu quả."
            )
        }
    }
}

pub fn courses_system(language: Language) -> &'static str {
    match language {
        Language::En => "You are a career advisor and skills training expert.
Your task is to recommend courses, materials, and learning resources to help candidates improve their weaknesses.
For each recommendation, provide:
1. Specific course/resource name
2. Brief description of content
3. Why it will help address the weakness
4. Link to the course/resource (if available)
5. Estimated time to complete

Provide maximum 3 recommendations for each weakness.
Focus on reputable and well-known sources including both free and paid options.
Answer in English.",
        Language::Vi => "Bạn là một cố vấn nghề nghiệp và chuyên gia đào tạo kỹ năng.
Nhiệm vụ của bạn là đề xuất các khóa học, tài liệu và nguồn học tập để giúp ứng viên cải thiện điểm yếu.
Đối với mỗi khuyến nghị, hãy cung cấp:
1. Tên khóa học/tài liệu cụ thể
2. Mô tả ngắn gọn về nội dung
3. Lý do tại sao nó sẽ giúp cải thiện điểm yếu
4. Liên kết đến khóa học/tài liệu (nếu có)
5. Thời gian dự kiến để hoàn thành

Đưa ra tối đa 3 khuyến nghị cho mỗi điểm yếu.
Tập trung vào các nguồn uy tín và nổi tiếng bao gồm cả nguồn miễn phí và trả phí.
Trả lời bằng tiếng Việt.",
    }
}

pub fn courses_request(weaknesses: &str, language: Language) -> String {
    match language {
        Language::En => format!(
            "Based on my interview assessment, I need to improve the following weaknesses:

{weaknesses}

Please suggest courses, materials, and learning resources to help me improve these weaknesses."
        ),
        Language::Vi => format!(
            "Dựa trên đánh giá phỏng vấn, tôi cần cải thiện các điểm yếu sau:

{weaknesses}

Vui lòng đề xuất các khóa học, tài liệu và nguồn học tập để giúp tôi cải thiện những điểm yếu này."
        ),
    }
}
