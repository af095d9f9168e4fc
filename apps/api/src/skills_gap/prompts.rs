// Skills gap analysis prompt templates.

use crate::models::Language;

pub fn analyst_role(language: Language) -> &'static str {
    match language {
        Language::En => "You are a skills gap analysis expert.",
        Language::Vi => "Bạn là chuyên gia phân tích khoảng cách kỹ năng.",
    }
}

pub fn gap_analysis_request(resume: &str, job_description: &str, language: Language) -> String {
    match language {
        Language::En => format!(
            "Analyze in detail the skills gap between the following resume and job description:

Resume:
{resume}

Job description:
{job_description}

Please provide:
1. An estimate of the percentage of matching skills
2. The most important missing skills
3. Suggestions for closing the skills gap
4. An overall fit rating (1-10)
5. Unique strengths from the resume"
        ),
        Language::Vi => format!(
            "Phân tích chi tiết khoảng cách kỹ năng giữa sơ yếu lý lịch và mô tả công việc sau:

Sơ yếu lý lịch:
{resume}

Mô tả công việc:
{job_description}

Hãy cung cấp:
1. Đánh giá phần trăm kỹ năng phù hợp
2. Danh sách kỹ năng thiếu quan trọng nhất
3. Đề xuất cách thu hẹp khoảng cách kỹ năng
4. Xếp hạng mức độ phù hợp tổng thể (1-10)
5. Điểm mạnh độc đáo từ sơ yếu lý lịch"
        ),
    }
}
