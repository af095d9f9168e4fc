// Interview simulator prompt templates.

use crate::llm_client::prompts::ASSISTANT_SYSTEM;
use crate::models::{InterviewType, Language};

/// System prompt for the simulated interviewer.
pub fn interviewer_system(
    interview_type: InterviewType,
    job_role: Option<&str>,
    resume: Option<&str>,
    language: Language,
) -> String {
    let role = interview_type.interviewer_role(language);
    let mut prompt = match language {
        Language::En => format!(
            "You are an experienced {role} conducting a professional interview.
Conduct a realistic and authentic interview with the candidate.

Interview rules:
1. Ask only one question at a time.
2. Listen to the candidate's response and provide brief feedback.
3. Feedback should be constructive and professional.
4. After asking at least 5 questions, ask if the candidate wants to end the interview.
5. If the candidate wants to end, provide an overall assessment of the interview, \
including an overall score out of 10.

Start by introducing yourself and explaining the interview process.
Answer in English."
        ),
        Language::Vi => format!(
            "Bạn là một {role} chuyên nghiệp và có kinh nghiệm.
Hãy tiến hành một buổi phỏng vấn thực tế và chân thực với ứng viên.

Quy tắc của cuộc phỏng vấn:
1. Mỗi lần bạn chỉ hỏi một câu hỏi.
2. Lắng nghe câu trả lời của ứng viên và đưa ra phản hồi ngắn gọn.
3. Phản hồi nên có tính xây dựng và chuyên nghiệp.
4. Sau khi đã hỏi ít nhất 5 câu hỏi, hãy hỏi ứng viên có muốn kết thúc không.
5. Nếu ứng viên muốn kết thúc, hãy đưa ra đánh giá tổng thể về buổi phỏng vấn, \
kèm điểm tổng thể trên thang 10.

Hãy bắt đầu bằng cách giới thiệu bản thân và giải thích quy trình phỏng vấn.
Trả lời bằng tiếng Việt."
        ),
    };

    if let Some(job_role) = job_role {
        match language {
            Language::En => prompt.push_str(&format!("\n\nJob position: {job_role}")),
            Language::Vi => prompt.push_str(&format!("\n\nVị trí ứng tuyển: {job_role}")),
        }
    }

    if let Some(resume) = resume {
        match language {
            Language::En => {
                prompt.push_str(&format!("\n\nInformation from candidate's resume:\n{resume}"))
            }
            Language::Vi => prompt.push_str(&format!("\n\nThông tin từ CV của ứng viên:\n{resume}")),
        }
    }

    prompt
}

/// The candidate's opening message.
pub fn opening_request(
    interview_type: InterviewType,
    job_role: Option<&str>,
    language: Language,
) -> String {
    let kind = interview_type.as_str();
    match (language, job_role) {
        (Language::En, Some(role)) => format!("I want to start a {kind} interview for the {role} position"),
        (Language::En, None) => format!("I want to start a {kind} interview"),
        (Language::Vi, Some(role)) => format!("Tôi muốn bắt đầu buổi phỏng vấn {kind} cho vị trí {role}"),
        (Language::Vi, None) => format!("Tôi muốn bắt đầu buổi phỏng vấn {kind}"),
    }
}

/// System prompt for the interview coach that grades a finished transcript.
pub fn coach_system(language: Language) -> String {
    format!(
        "{ASSISTANT_SYSTEM}\n\nYou are an interview coach with many years of experience.\n\n{}",
        language.instruction()
    )
}

/// Asks for structured feedback and scores on a transcript.
pub fn feedback_request(transcript: &str, language: Language) -> String {
    match language {
        Language::En => format!(
            "Analyze the following interview and provide detailed feedback:

{transcript}

Feedback should include:
1. Strengths in the candidate's responses
2. Areas for improvement
3. Specific answers that the candidate handled well and why
4. Suggestions for more effectively answering challenging questions
5. Overall assessment and score for the interview (scale of 1-10)

Also rate each of these on a 1-10 scale, one per line in the form \"Name: N/10\": \
Technical Skills, Communication Skills, Problem-Solving Ability, Leadership Quality, Overall Score.

Provide honest, detailed, and helpful feedback to help the candidate improve their interviewing skills."
        ),
        Language::Vi => format!(
            "Hãy phân tích buổi phỏng vấn sau đây và đưa ra phản hồi chi tiết:

{transcript}

Phản hồi nên bao gồm:
1. Điểm mạnh trong câu trả lời của ứng viên
2. Lĩnh vực cần cải thiện
3. Các câu trả lời cụ thể mà ứng viên trả lời tốt và lý do
4. Đề xuất cách trả lời hiệu quả hơn cho các câu hỏi khó
5. Đánh giá tổng thể và chấm điểm buổi phỏng vấn (thang điểm 1-10)

Đồng thời chấm điểm từng mục theo thang 1-10, mỗi mục một dòng theo dạng \"Tên: N/10\": \
Kỹ thuật, Giao tiếp, Giải quyết vấn đề, Lãnh đạo, Điểm tổng thể.

Đưa ra phản hồi chân thành, chi tiết và hữu ích để giúp ứng viên cải thiện kỹ năng phỏng vấn."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interviewer_system_includes_role_and_resume() {
        let prompt = interviewer_system(
            InterviewType::Technical,
            Some("Backend Engineer"),
            Some("5 years of Rust"),
            Language::En,
        );
        assert!(prompt.starts_with("You are an experienced technical interviewer"));
        assert!(prompt.contains("Job position: Backend Engineer"));
        assert!(prompt.contains("5 years of Rust"));
    }

    #[test]
    fn test_interviewer_system_vietnamese() {
        let prompt = interviewer_system(InterviewType::Hr, None, None, Language::Vi);
        assert!(prompt.contains("người phỏng vấn từ bộ phận nhân sự"));
        assert!(!prompt.contains("Vị trí ứng tuyển"));
    }

    #[test]
    fn test_opening_request() {
        assert_eq!(
            opening_request(InterviewType::Case, Some("Consultant"), Language::En),
            "I want to start a case interview for the Consultant position"
        );
    }

    #[test]
    fn test_feedback_request_embeds_transcript() {
        let prompt = feedback_request("USER: hi", Language::En);
        assert!(prompt.contains("USER: hi"));
        assert!(prompt.contains("scale of 1-10"));
    }
}
