// Job market insight prompt templates.

use crate::models::Language;

pub const MARKET_ANALYST_SYSTEM: &str =
    "You are a job market analysis expert with access to current labor market data.";

pub fn insights_request(job_role: &str, country: &str, language: Language) -> String {
    match language {
        Language::En => format!(
            r#"Provide a job market analysis for {job_role} position in {country}.
Include the following information:
1. Average salary range
2. Most important required skills
3. Current hiring trends
4. Top companies that are hiring
5. Industry growth forecast for the next 3-5 years

Format your response as JSON with fields:
"salary_range": "...",
"top_skills": ["skill 1", "skill 2", ...],
"hiring_trends": "...",
"top_companies": ["company 1", "company 2", ...],
"growth_forecast": "..."

Ensure information is specific to the {country} market."#
        ),
        Language::Vi => format!(
            r#"Hãy cung cấp phân tích thị trường việc làm cho vị trí {job_role} tại {country}.
Bao gồm những thông tin sau:
1. Mức lương trung bình (khoảng)
2. Kỹ năng quan trọng nhất được yêu cầu
3. Xu hướng tuyển dụng hiện tại
4. Các công ty hàng đầu đang tuyển dụng
5. Dự báo tăng trưởng ngành trong 3-5 năm tới

Hãy định dạng phản hồi dưới dạng JSON với các trường:
"salary_range": "...",
"top_skills": ["kỹ năng 1", "kỹ năng 2", ...],
"hiring_trends": "...",
"top_companies": ["công ty 1", "công ty 2", ...],
"growth_forecast": "..."

Đảm bảo thông tin cụ thể cho thị trường {country}. Trả lời bằng tiếng Việt."#
        ),
    }
}

pub fn trends_system(language: Language) -> &'static str {
    match language {
        Language::En => "You are a job market and recruitment trends expert.
For the given industry provide:
1. The 10 most demanded technical skills, with their share of job postings in %
2. The 5 most important soft skills, with their share in %
3. High-value certifications and how much their value grew over the last year in %
4. Skills and technologies that emerged in the past 6 months
5. Expected skill trends for the next 1-2 years
Use concrete numbers that can be charted.
Answer in English.",
        Language::Vi => "Bạn là chuyên gia phân tích thị trường việc làm và xu hướng tuyển dụng.
Với ngành được nêu, hãy đưa ra:
1. 10 kỹ năng chuyên môn được tìm kiếm nhiều nhất, kèm tỷ lệ % trong tin tuyển dụng
2. 5 kỹ năng mềm quan trọng nhất, kèm tỷ lệ %
3. Các chứng chỉ giá trị cao và mức tăng giá trị % so với năm trước
4. Kỹ năng và công nghệ mới nổi trong 6 tháng qua
5. Dự đoán xu hướng kỹ năng trong 1-2 năm tới
Dùng số liệu cụ thể để có thể vẽ biểu đồ.
Trả lời bằng tiếng Việt.",
    }
}

pub fn trends_request(industry: &str, job_role: Option<&str>, language: Language) -> String {
    match (language, job_role) {
        (Language::En, Some(role)) => format!(
            "Analyze the skills currently in demand in the {industry} industry for the {role} position."
        ),
        (Language::En, None) => {
            format!("Analyze the skills currently in demand in the {industry} industry.")
        }
        (Language::Vi, Some(role)) => format!(
            "Hãy phân tích các kỹ năng đang được tìm kiếm trong ngành {industry} cho vị trí {role}."
        ),
        (Language::Vi, None) => {
            format!("Hãy phân tích các kỹ năng đang được tìm kiếm trong ngành {industry}.")
        }
    }
}

pub fn competitors_system(language: Language) -> &'static str {
    match language {
        Language::En => "You are a recruitment and labor market expert.
Compare the candidate's resume with the typical competing candidate in the same industry and provide:
1. Strengths and weaknesses against the market, scoring each key skill from 1 to 10
2. Skills that are missing or need work to compete
3. The candidate's unique competitive edge
4. The expected salary for this profile compared to the industry average
5. The competition ratio for the position (candidates per opening)
Use concrete numbers that can be charted.
Answer in English.",
        Language::Vi => "Bạn là chuyên gia tuyển dụng và phân tích thị trường lao động.
Hãy so sánh CV của ứng viên với ứng viên cạnh tranh điển hình trong cùng ngành và đưa ra:
1. Điểm mạnh và điểm yếu so với thị trường, chấm điểm 1-10 cho từng kỹ năng chính
2. Các kỹ năng còn thiếu hoặc cần cải thiện để cạnh tranh
3. Lợi thế cạnh tranh riêng của ứng viên
4. Mức lương dự kiến cho hồ sơ này so với trung bình ngành
5. Tỷ lệ cạnh tranh cho vị trí (số ứng viên trên mỗi vị trí)
Dùng số liệu cụ thể để có thể vẽ biểu đồ.
Trả lời bằng tiếng Việt.",
    }
}

pub fn competitors_request(
    resume: &str,
    industry: &str,
    job_role: Option<&str>,
    language: Language,
) -> String {
    let target = match (language, job_role) {
        (Language::En, Some(role)) => format!("the {industry} industry for the {role} position"),
        (Language::En, None) => format!("the {industry} industry"),
        (Language::Vi, Some(role)) => format!("ngành {industry} cho vị trí {role}"),
        (Language::Vi, None) => format!("ngành {industry}"),
    };
    match language {
        Language::En => format!(
            "Based on my resume, compare me with competing candidates in {target}.\n\nMy resume:\n{resume}"
        ),
        Language::Vi => format!(
            "Dựa trên CV của tôi, hãy so sánh với các ứng viên cạnh tranh trong {target}.\n\nCV của tôi:\n{resume}"
        ),
    }
}

pub fn career_path_system(language: Language) -> &'static str {
    match language {
        Language::En => "You are a career development advisor.
From the candidate's resume, plan long-term career development and provide:
1. Three viable career paths for the next 5-10 years
2. The skills to build at each step of every path
3. A timeline for reaching those skills and certifications
4. Expected salary and positions at each stage
5. Neighbouring fields the current skills could transfer to
Lay each path out year by year with clear goals.
Answer in English.",
        Language::Vi => "Bạn là cố vấn phát triển nghề nghiệp.
Từ CV của ứng viên, hãy lập kế hoạch phát triển sự nghiệp dài hạn và đưa ra:
1. Ba lộ trình nghề nghiệp khả thi trong 5-10 năm tới
2. Các kỹ năng cần xây dựng ở từng bước của mỗi lộ trình
3. Mốc thời gian để đạt được các kỹ năng và chứng chỉ đó
4. Mức lương và vị trí dự kiến ở từng giai đoạn
5. Các lĩnh vực lân cận mà kỹ năng hiện tại có thể chuyển sang
Trình bày mỗi lộ trình theo từng năm với mục tiêu rõ ràng.
Trả lời bằng tiếng Việt.",
    }
}

pub fn career_path_request(
    resume: &str,
    industry: &str,
    job_role: Option<&str>,
    language: Language,
) -> String {
    let current = match (language, job_role) {
        (Language::En, Some(role)) => format!(", currently working as {role}"),
        (Language::Vi, Some(role)) => format!(", hiện đang làm vị trí {role}"),
        (_, None) => String::new(),
    };
    match language {
        Language::En => format!(
            "Based on my resume, suggest long-term career paths in the {industry} industry{current}.\n\nMy resume:\n{resume}"
        ),
        Language::Vi => format!(
            "Dựa trên CV của tôi, hãy gợi ý lộ trình phát triển nghề nghiệp dài hạn trong ngành {industry}{current}.\n\nCV của tôi:\n{resume}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_request_names_role_and_country() {
        let prompt = insights_request("Data Engineer", "Vietnam", Language::En);
        assert!(prompt.starts_with("Provide a job market analysis for Data Engineer position in Vietnam."));
        assert!(prompt.contains(r#""top_companies": ["company 1""#));
    }

    #[test]
    fn test_trends_request_with_and_without_role() {
        assert_eq!(
            trends_request("Fintech", None, Language::En),
            "Analyze the skills currently in demand in the Fintech industry."
        );
        assert!(trends_request("Fintech", Some("QA"), Language::Vi).ends_with("cho vị trí QA."));
    }

    #[test]
    fn test_profile_requests_embed_resume() {
        let prompt = competitors_request("Go, Kafka", "Banking", Some("SRE"), Language::En);
        assert!(prompt.starts_with(
            "Based on my resume, compare me with competing candidates in the Banking industry for the SRE position."
        ));
        assert!(prompt.ends_with("My resume:\nGo, Kafka"));

        let prompt = career_path_request("Go, Kafka", "Banking", None, Language::Vi);
        assert!(prompt.contains("trong ngành Banking.\n\nCV của tôi:\nGo, Kafka"));
    }
}
