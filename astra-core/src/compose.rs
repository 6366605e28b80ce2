//! Deterministic template composer.
//!
//! Every reply is assembled from fixed prose and slices of the static
//! knowledge base — a pure function of (profile, topic). For identical inputs
//! the output is byte-identical: no randomness, no clock reads, no external
//! state.

use crate::classify;
use crate::knowledge::{self, GradeAdvice, MajorCategory, UniversityTier};
use crate::models::{ChatTurn, Role, StudentProfile};

/// Fixed reply used whenever no profile is attached to the conversation,
/// independent of the incoming message.
const ONBOARDING_PROMPT: &str = "**Welcome to Astra!**

I'm your AI College Admissions Advisor, ready to help you navigate your journey to top universities.

To give you personalized advice, please complete the onboarding questionnaire with information about:
- Your current grade level
- Intended major(s)
- Target universities
- Current activities and achievements
- Strengths and areas for improvement

Once I know more about you, I can provide tailored recommendations for courses, extracurriculars, competitions, research opportunities, essays, and more!";

/// Produces Astra's reply for the given conversation state.
///
/// No profile → onboarding prompt. Initial greeting (empty message against an
/// empty conversation) → profile walkthrough. Otherwise the latest user turn
/// is classified and the first detected topic picks the generator.
pub fn compose_reply(
    history: &[ChatTurn],
    profile: Option<&StudentProfile>,
    initial_greeting: bool,
) -> String {
    let Some(profile) = profile else {
        return ONBOARDING_PROMPT.to_string();
    };

    if initial_greeting {
        return greeting_reply(profile);
    }

    match history.iter().rev().find(|turn| turn.role == Role::User) {
        Some(turn) => {
            let topics = classify::detect_topics(&turn.content);
            topic_reply(topics[0], profile)
        }
        None => greeting_reply(profile),
    }
}

fn topic_reply(topic: &str, profile: &StudentProfile) -> String {
    let major = knowledge::major_category(classify::detect_major_category(&profile.intended_majors));
    let tier =
        knowledge::university_tier(classify::detect_university_tier(&profile.target_universities));
    let grade = knowledge::grade_advice(profile.grade_level);

    match topic {
        "courses" => course_advice(profile, major, grade),
        "extracurriculars" => extracurricular_advice(profile, major, grade),
        "research" => research_advice(profile, major),
        "competitions" => competition_advice(profile, major, tier),
        "essays" => essay_advice(profile),
        "summer" => summer_advice(profile, major),
        "timeline" => timeline_advice(profile, grade),
        "testing" => testing_advice(tier),
        "recommendation" => recommendation_advice(profile),
        "spike" => spike_advice(profile, major),
        "waterloo" => waterloo_advice(),
        _ => general_advice(profile),
    }
}

fn primary<'a>(values: &'a [String], fallback: &'a str) -> &'a str {
    values.first().map(String::as_str).unwrap_or(fallback)
}

fn bullet_list(out: &mut String, items: &[&str]) {
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}

// ============================================================================
// Initial greeting
// ============================================================================

fn greeting_reply(profile: &StudentProfile) -> String {
    let major = knowledge::major_category(classify::detect_major_category(&profile.intended_majors));
    let tier =
        knowledge::university_tier(classify::detect_university_tier(&profile.target_universities));
    let grade = knowledge::grade_advice(profile.grade_level);
    let strength_cats = classify::detect_strength_categories(&profile.strengths);
    let weakness_cats = classify::detect_weakness_categories(&profile.weaknesses);

    let mut headline_schools = profile
        .target_universities
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if profile.target_universities.len() > 3 {
        headline_schools.push_str(" and others");
    }

    let mut out = format!(
        "**Welcome to Astra, your College Admissions Advisor!**\n\n\
         I've reviewed your profile and I'm excited to help you on your journey to {}!\n\n\
         ---\n\n\
         **Your Profile at a Glance:**\n\
         - **Grade Level:** {}\n\
         - **Target Major(s):** {}\n\
         - **Target Schools:** {}\n\n\
         ---\n\n\
         **What It Takes for Your Target Schools:**\n\n",
        headline_schools,
        profile.grade_level.label(),
        profile.intended_majors.join(", "),
        profile.target_universities.join(", "),
    );

    bullet_list(&mut out, &tier.expectations[..tier.expectations.len().min(4)]);

    out.push_str(&format!(
        "\n---\n\n**Your Current Strengths:**\n{}\n\n",
        profile.strengths
    ));

    if !strength_cats.is_empty() {
        out.push_str("**How to Build on These Strengths:**\n");
        for category in strength_cats.iter().take(2) {
            let guidance = knowledge::strengths_guidance(category);
            bullet_list(&mut out, &guidance[..guidance.len().min(2)]);
        }
    }

    out.push_str(&format!("\n**Areas to Develop:**\n{}\n\n", profile.weaknesses));

    if !weakness_cats.is_empty() {
        out.push_str("**Recommendations to Address These:**\n");
        for category in weakness_cats.iter().take(2) {
            let guidance = knowledge::weaknesses_guidance(category);
            bullet_list(&mut out, &guidance[..guidance.len().min(2)]);
        }
    }

    out.push_str(&format!(
        "\n---\n\n**Your {} Year Priorities:**\n\n",
        profile.grade_level.label()
    ));

    bullet_list(&mut out, grade.priorities);

    out.push_str(&format!(
        "\n---\n\n**Recommended Next Steps for {}:**\n\n**Courses to Consider:**\n",
        primary(&profile.intended_majors, "Your Major"),
    ));

    bullet_list(&mut out, &major.courses[..major.courses.len().min(3)]);

    out.push_str("\n**Key Competitions:**\n");
    bullet_list(&mut out, &major.competitions[..major.competitions.len().min(3)]);

    out.push_str("\n**Extracurricular Ideas:**\n");
    bullet_list(
        &mut out,
        &major.extracurriculars[..major.extracurriculars.len().min(3)],
    );

    out.push_str(
        "\n---\n\n\
         **What would you like to explore?**\n\n\
         I can help you with:\n\
         - Course planning and academic strategy\n\
         - Extracurricular development and building your \"spike\"\n\
         - Research opportunities and competitions\n\
         - Summer programs and internships\n\
         - Essay brainstorming and strategy\n\
         - Application timeline and deadlines\n\n\
         Just ask me anything about your college journey!",
    );

    out
}

// ============================================================================
// Topic generators
// ============================================================================

fn course_advice(profile: &StudentProfile, major: &MajorCategory, grade: &GradeAdvice) -> String {
    let mut out = format!(
        "**Course Planning for {}**\n\n\
         Based on your goals of studying {} at top universities, here's my course planning advice:\n\n\
         ---\n\n\
         **Recommended Courses for Your Major:**\n\n",
        profile.intended_majors.join(" / "),
        profile.intended_majors.join(" or "),
    );

    bullet_list(&mut out, major.courses);

    out.push_str("\n---\n\n**Grade-Specific Recommendations:**\n\n");

    bullet_list(&mut out, grade.courses);

    out.push_str(&format!(
        "\n---\n\n\
         **Course Selection Strategy:**\n\n\
         1. **Rigor Matters:** Admissions officers want to see you taking the most challenging courses available at your school. If you have access to AP/IB/Honors courses, take them.\n\n\
         2. **Balance Depth and Breadth:** While focusing on your major area, don't neglect other subjects. A well-rounded academic profile includes strength in humanities, sciences, and math.\n\n\
         3. **Show Progression:** Your course rigor should increase each year. Freshman year might have 0-1 APs, sophomore year 2-3, and junior/senior year 4-6.\n\n\
         4. **Connect to Your Spike:** If your main interest is {}, make sure you're taking the most advanced courses in that area.\n\n\
         ---\n\n\
         **Questions to Consider:**\n\
         - What AP/IB courses does your school offer?\n\
         - Are there dual enrollment options at local colleges?\n\
         - Can you self-study for AP exams in subjects not offered at your school?\n\n\
         Would you like specific recommendations based on your school's course offerings?",
        primary(&profile.intended_majors, "your major"),
    ));

    out
}

fn extracurricular_advice(
    profile: &StudentProfile,
    major: &MajorCategory,
    grade: &GradeAdvice,
) -> String {
    let mut out = format!(
        "**Extracurricular Strategy for {} Applicants**\n\n\
         Your current activities: {}\n\n\
         ---\n\n\
         **Key Principle: Depth Over Breadth**\n\n\
         Top universities want to see a \"spike\" - one or two areas where you've achieved significant depth and impact. Joining 15 clubs won't impress admissions; leading one initiative to national recognition will.\n\n\
         ---\n\n\
         **Recommended Activities for {}:**\n\n",
        profile.intended_majors.join(" / "),
        profile.current_activities,
        primary(&profile.intended_majors, "your major"),
    );

    bullet_list(&mut out, major.extracurriculars);

    out.push_str("\n---\n\n**Building Your Activity Profile:**\n\n");

    bullet_list(&mut out, grade.activities);

    out.push_str(&format!(
        "\n---\n\n\
         **The 4-Tier Activity Framework:**\n\n\
         1. **Tier 1 (National/International Impact):** Winning national competitions, published research, starting an organization with significant reach. Aim for 1-2 of these.\n\n\
         2. **Tier 2 (State/Regional Impact):** State-level awards, significant leadership positions, impressive independent projects. Aim for 2-3 of these.\n\n\
         3. **Tier 3 (School-Wide Impact):** Club leadership, team captains, significant school contributions. These support your profile.\n\n\
         4. **Tier 4 (Personal Development):** Hobbies, general involvement. These round out your profile but don't drive admissions.\n\n\
         ---\n\n\
         **Based on Your Strengths ({}):**\n\n\
         Focus on taking your existing strengths to the next level. What's one thing you could do this month to elevate your impact?\n\n\
         Would you like specific project ideas or help planning your extracurricular strategy?",
        profile.strengths,
    ));

    out
}

fn research_advice(profile: &StudentProfile, major: &MajorCategory) -> String {
    let mut out = format!(
        "**Research Opportunities for {} Applicants**\n\n\
         Research experience is one of the most powerful ways to demonstrate intellectual curiosity and capability for top universities.\n\n\
         ---\n\n\
         **Research Ideas in Your Field:**\n\n",
        profile.intended_majors.join(" / "),
    );

    bullet_list(&mut out, major.research);

    out.push_str(
        "\n---\n\n\
         **How to Find Research Opportunities:**\n\n\
         **1. University Professors (Cold Emailing)**\n\
         - Research professors at local universities working in areas you find interesting\n\
         - Send a personalized email expressing genuine interest in their work\n\
         - Mention specific papers you've read and questions you have\n\
         - Ask about summer research opportunities or ongoing projects needing assistance\n\n\
         **2. Science Fairs and Competitions**\n\
         - Regeneron Science Talent Search (senior year)\n\
         - ISEF (International Science and Engineering Fair)\n\
         - Regional and state science fairs (good stepping stones)\n\
         - Google Science Fair / Breakthrough Junior Challenge\n\n\
         **3. Independent Research Projects**\n\
         - Identify a problem in your field that interests you\n\
         - Develop a methodology to investigate it\n\
         - Document your process and findings\n\
         - Consider publishing in high school research journals\n\n\
         ---\n\n\
         **Building a Research Portfolio:**\n\n\
         1. **Start Small:** Begin with a literature review or replicating existing research\n\
         2. **Find a Mentor:** A professor, graduate student, or industry professional\n\
         3. **Document Everything:** Keep detailed notes, data, and methodology\n\
         4. **Seek Publication:** Even small journals show you can complete the research cycle\n\
         5. **Present Your Work:** Science fairs, conferences, school presentations\n\n\
         ---\n\n\
         **Timeline for Research:**\n\n\
         - **Grade 9-10:** Explore interests, learn research methodology, start small projects\n\
         - **Grade 11:** Complete significant research, submit to competitions, seek publication\n\
         - **Grade 12:** Finalize research for applications, continue work if ongoing\n\n\
         Would you like help designing a specific research project or crafting cold emails to professors?",
    );

    out
}

fn competition_advice(
    profile: &StudentProfile,
    major: &MajorCategory,
    tier: &UniversityTier,
) -> String {
    let mut out = format!(
        "**Competition Strategy for {} Applicants**\n\n\
         Competitions demonstrate your ability to excel beyond the classroom. For {}, awards in relevant competitions significantly strengthen your application.\n\n\
         ---\n\n\
         **Top Competitions for Your Major:**\n\n",
        profile.intended_majors.join(" / "),
        primary(&profile.target_universities, "your target schools"),
    );

    bullet_list(&mut out, major.competitions);

    out.push_str(
        "\n---\n\n\
         **Competition Strategy by Level:**\n\n\
         **National/International (Highest Impact):**\n\
         - These awards can be application-defining\n\
         - Start preparing 1-2 years in advance\n\
         - Focus on 2-3 key competitions rather than many\n\n\
         **State/Regional (Strong Impact):**\n\
         - More achievable stepping stones\n\
         - Build skills for national competitions\n\
         - Show consistent improvement over time\n\n\
         **School/Local (Foundation):**\n\
         - Good for building experience\n\
         - Less weight in applications but still valuable\n\
         - Use these to identify strengths\n\n\
         ---\n\n\
         **Preparation Tips:**\n\n\
         1. **Start Early:** Most olympiad-level competitors prepare for 2+ years\n\
         2. **Use Past Problems:** Every major competition has archived problems\n\
         3. **Find Study Groups:** Connect with other competitors online or locally\n\
         4. **Get Coaching:** Consider summer programs or tutors for serious preparation\n\
         5. **Track Progress:** Take practice tests regularly to measure improvement\n\n\
         ---\n\n\
         **What Your Target Schools Want:**\n\n",
    );

    bullet_list(&mut out, &tier.expectations[..tier.expectations.len().min(3)]);

    out.push_str(
        "\n---\n\n\
         Which competitions interest you most? I can provide specific preparation strategies and timelines.",
    );

    out
}

fn essay_advice(profile: &StudentProfile) -> String {
    let mut out = format!(
        "**Essay Strategy for {} Applications**\n\n\
         Your essays are where your personality, story, and voice come through. Strong essays can make the difference between acceptance and rejection at top schools.\n\n\
         ---\n\n\
         **Personal Statement Topics to Consider:**\n\n",
        profile.target_universities.join(", "),
    );

    bullet_list(&mut out, knowledge::ESSAY_TOPICS.personal_statement);

    out.push_str(
        "\n---\n\n\
         **Key Principles for Strong Essays:**\n\n\
         **1. Show, Don't Tell**\n\
         - Don't say \"I'm passionate about computer science\"\n\
         - Instead, describe the moment you stayed up until 3am debugging code because you couldn't rest until you solved the problem\n\n\
         **2. Be Specific and Authentic**\n\
         - Generic essays read like everyone else's\n\
         - Your unique details and voice make you memorable\n\
         - Admissions officers read thousands of essays - stand out!\n\n\
         **3. Reflect and Grow**\n\
         - The best essays show self-awareness\n\
         - Discuss what you learned, how you changed, what you now understand\n\
         - Connect experiences to who you are today\n\n\
         **4. Connect to Your Future**\n\
         - Link your past experiences to your goals\n\
         - Show a clear through-line from who you were to who you're becoming\n\n\
         ---\n\n\
         **Supplemental Essay Strategies:**\n\n",
    );

    bullet_list(&mut out, knowledge::ESSAY_TOPICS.supplemental_strategies);

    out.push_str("\n---\n\n**Common Mistakes to Avoid:**\n\n");

    bullet_list(&mut out, knowledge::ESSAY_TOPICS.common_mistakes);

    out.push_str(&format!(
        "\n---\n\n\
         **Essay Writing Process:**\n\n\
         1. **Brainstorm (2 weeks):** List 10-15 potential stories and experiences\n\
         2. **Outline (1 week):** Choose your strongest ideas and create detailed outlines\n\
         3. **Draft (2 weeks):** Write full drafts without editing\n\
         4. **Revise (3-4 weeks):** Multiple revision rounds with feedback\n\
         5. **Polish (1 week):** Final proofreading and refinements\n\n\
         ---\n\n\
         **Your Unique Angle:**\n\n\
         Based on your profile - strengths in {} and interest in {} - consider how these elements combine in a way that's uniquely you.\n\n\
         Would you like help brainstorming specific essay topics or reviewing an outline?",
        profile.strengths,
        profile.intended_majors.join("/"),
    ));

    out
}

fn summer_advice(profile: &StudentProfile, major: &MajorCategory) -> String {
    let mut out = format!(
        "**Summer Planning for {} Applicants**\n\n\
         Summer is your chance to pursue intensive experiences that aren't possible during the school year. Use this time strategically!\n\n\
         ---\n\n\
         **Top Summer Programs for Your Major:**\n\n",
        profile.intended_majors.join(" / "),
    );

    bullet_list(&mut out, major.summer_programs);

    out.push_str(
        "\n---\n\n\
         **Summer Options by Impact Level:**\n\n\
         **Tier 1 - Highly Selective Programs:**\n\
         - RSI (Research Science Institute) - Free, extremely competitive\n\
         - MIT PRIMES / PRIMES-USA - Research with MIT professors\n\
         - SSP (Summer Science Program) - Intensive research experience\n\
         - TASP (Telluride Association Summer Program) - Humanities focus\n\n\
         **Tier 2 - Strong Programs:**\n\
         - Governor's Schools (free, state-run)\n\
         - University research programs (many available)\n\
         - Internships at companies or labs\n\
         - Intensive skill-building camps\n\n\
         **Tier 3 - Good Experiences:**\n\
         - Online courses from universities\n\
         - Self-directed projects\n\
         - Jobs or internships in relevant fields\n\
         - Community service projects\n\n\
         ---\n\n\
         **If You Can't Get Into Selective Programs:**\n\n\
         Don't worry! Many successful applicants never attended famous programs. What matters is what you **do** with your summer:\n\n\
         1. **Self-directed projects:** Build an app, write a research paper, start a business\n\
         2. **Local internships:** Reach out to local professionals in your field\n\
         3. **Online learning:** Complete courses from MIT OpenCourseWare, Coursera, etc.\n\
         4. **Community impact:** Start an initiative that helps your community\n\n\
         ---\n\n\
         **Summer Planning Timeline:**\n\n\
         - **January-February:** Research programs and deadlines\n\
         - **March-April:** Submit applications\n\
         - **May:** Finalize plans, prepare for programs\n\
         - **June-August:** Execute your summer plan\n\
         - **Late August:** Reflect and document what you learned\n\n\
         ---\n\n\
         What type of summer experience are you most interested in? I can help you identify specific opportunities or design an independent project.",
    );

    out
}

fn timeline_advice(profile: &StudentProfile, grade: &GradeAdvice) -> String {
    let grade_label = profile
        .grade_level
        .as_str()
        .replace('-', " ")
        .replace("grade", "Grade");

    let mut out = format!(
        "**Timeline and Action Plan**\n\n\
         Based on your profile, here's a comprehensive timeline for your college admissions journey:\n\n\
         ---\n\n\
         **Your {grade_label} Timeline:**\n\n",
    );

    bullet_list(&mut out, grade.timeline);

    out.push_str(
        "\n---\n\n\
         **Complete High School Timeline:**\n\n\
         **Freshman Year (Grade 9):**\n\
         - Explore interests through clubs and activities\n\
         - Build strong academic foundations\n\
         - Develop core skills in potential areas of focus\n\
         - Summer: Try new experiences, start learning a skill\n\n\
         **Sophomore Year (Grade 10):**\n\
         - Begin narrowing to 1-2 primary interests\n\
         - Take on initial leadership roles\n\
         - Start preparing for PSAT/standardized tests\n\
         - Summer: First substantive experience (program, project, or internship)\n\n\
         **Junior Year (Grade 11) - CRITICAL:**\n\
         - Most challenging course load\n\
         - Highest leadership positions\n\
         - Major achievements in competitions/research\n\
         - SAT/ACT prep and testing (take by end of junior year)\n\
         - Begin college research and list development\n\
         - Summer: Most impactful experience (prestigious program, research, or major project)\n\n\
         **Senior Year (Grade 12):**\n\
         - August-September: Finalize college list, start essays\n\
         - October: Complete Common App, Early Decision applications\n\
         - November: Submit Early applications\n\
         - December-January: Complete Regular Decision applications\n\
         - March-April: Receive decisions, make final choice\n\
         - May: Commit to school, send final transcript\n\n\
         ---\n\n\
         **Key Deadlines to Track:**\n\n\
         - **PSAT:** October (sophomore and junior year)\n\
         - **SAT/ACT:** Multiple dates, aim to finish by June of junior year\n\
         - **AP Exams:** May (registration in fall)\n\
         - **Early Decision/Action:** November 1-15 (varies by school)\n\
         - **Regular Decision:** January 1-15 (varies by school)\n\
         - **Financial Aid (FAFSA/CSS):** October of senior year\n\n\
         ---\n\n\
         Would you like a more detailed timeline for a specific aspect of your preparation?",
    );

    out
}

fn testing_advice(tier: &UniversityTier) -> String {
    let mut out = String::from(
        "**Standardized Testing Strategy**\n\n\
         Testing is one component of your application. Here's how to approach it strategically:\n\n\
         ---\n\n\
         **Score Targets for Your Schools:**\n\n",
    );

    let mut matched = false;
    for expectation in tier.expectations {
        let lower = expectation.to_lowercase();
        if lower.contains("score") || lower.contains("test") {
            out.push_str(&format!("- {expectation}\n"));
            matched = true;
        }
    }
    if !matched {
        out.push_str("- Aim for 1500+ SAT or 33+ ACT for highly selective schools\n");
    }

    out.push_str(
        "\n---\n\n\
         **SAT vs. ACT:**\n\n\
         Take a full practice test of each to see which suits you better:\n\
         - **SAT:** More strategic, fewer questions, reading-heavy\n\
         - **ACT:** Faster pace, science section, more straightforward math\n\n\
         Many students score equivalently on both, but some find one format significantly easier.\n\n\
         ---\n\n\
         **Preparation Strategy:**\n\n\
         **Phase 1 - Diagnostic (1-2 weeks):**\n\
         - Take full official practice tests for SAT and ACT\n\
         - Identify strengths and weaknesses\n\
         - Choose which test to focus on\n\n\
         **Phase 2 - Content Review (4-6 weeks):**\n\
         - Study weak content areas\n\
         - Use official prep materials (College Board, ACT.org)\n\
         - Consider prep courses or tutoring for targeted help\n\n\
         **Phase 3 - Practice Testing (4-6 weeks):**\n\
         - Take full practice tests weekly\n\
         - Review every mistake in detail\n\
         - Focus on timing and stamina\n\n\
         **Phase 4 - Final Prep (2 weeks before test):**\n\
         - Light review, no new content\n\
         - Focus on test-day strategies\n\
         - Get plenty of sleep\n\n\
         ---\n\n\
         **Test-Optional Considerations:**\n\n\
         Many schools are now test-optional. Submit scores if:\n\
         - Your scores are at or above the school's 50th percentile\n\
         - Your scores strengthen a weaker part of your application\n\n\
         Consider going test-optional if:\n\
         - Your scores are significantly below the school's range\n\
         - The rest of your application is very strong\n\n\
         ---\n\n\
         **Subject Tests / AP Scores:**\n\n\
         - Most schools no longer require SAT Subject Tests (discontinued)\n\
         - Strong AP scores (4s and 5s) can demonstrate subject mastery\n\
         - Some competitive programs value specific AP scores\n\n\
         ---\n\n\
         **Timeline:**\n\n\
         - **Sophomore Spring:** Take PSAT for practice\n\
         - **Junior Fall:** Take PSAT (National Merit qualifier)\n\
         - **Junior Winter/Spring:** First SAT/ACT attempts\n\
         - **Junior Summer:** Prep and retake if needed\n\
         - **Senior Fall:** Final attempt if necessary\n\n\
         What's your current testing situation? I can provide more specific prep recommendations.",
    );

    out
}

fn recommendation_advice(profile: &StudentProfile) -> String {
    format!(
        "**Letters of Recommendation Strategy**\n\n\
         Strong recommendation letters provide insight into who you are beyond grades and test scores. Here's how to secure excellent recommendations:\n\n\
         ---\n\n\
         **Who Should Write Your Letters:**\n\n\
         **Core Academic Recommendations (2 required by most schools):**\n\
         - One STEM teacher (math, science, computer science)\n\
         - One humanities teacher (English, history, social studies)\n\
         - Choose teachers who know you well, not just classes where you got an A\n\n\
         **Additional Recommendations (optional but valuable):**\n\
         - Counselor letter (required)\n\
         - Activity supervisor, coach, or mentor\n\
         - Research mentor or employer\n\
         - Alumni of your target schools\n\n\
         ---\n\n\
         **Choosing the Right Teachers:**\n\n\
         Ask yourself:\n\
         1. Has this teacher seen me overcome challenges?\n\
         2. Has this teacher seen me contribute to class discussions?\n\
         3. Have I had meaningful conversations with this teacher outside of class?\n\
         4. Can this teacher speak to my intellectual curiosity and character?\n\n\
         **Important:** A glowing letter from a teacher who truly knows you is far more valuable than a generic letter from a \"famous\" or senior teacher.\n\n\
         ---\n\n\
         **How to Ask:**\n\n\
         **Timing:**\n\
         - Ask at the end of junior year or beginning of senior year\n\
         - Give teachers at least 4-6 weeks before deadlines\n\
         - Ask in person first, then follow up with formal request\n\n\
         **What to Provide:**\n\
         - Your resume/activity list\n\
         - A \"brag sheet\" about your accomplishments and goals\n\
         - Why you chose this teacher (specific memories or moments)\n\
         - Your target schools and what they're looking for\n\
         - Deadline information for each school\n\n\
         ---\n\n\
         **Building Relationships Now:**\n\n\
         If you're not yet a senior:\n\
         - Participate actively in class\n\
         - Visit office hours with genuine questions\n\
         - Share your interests and goals\n\
         - Ask for feedback on your work\n\
         - Attend school events where teachers are present\n\n\
         ---\n\n\
         **Common Mistakes:**\n\n\
         - Asking teachers who don't know you well\n\
         - Giving insufficient time or information\n\
         - Not following up appropriately\n\
         - Choosing only teachers from your major area\n\n\
         ---\n\n\
         Based on your activities ({}), think about which teachers or mentors have seen you at your best. Would you like help crafting a request or preparing materials for your recommenders?",
        profile.current_activities,
    )
}

fn spike_advice(profile: &StudentProfile, major: &MajorCategory) -> String {
    let mut out = format!(
        "**Building Your \"Spike\" for Top Universities**\n\n\
         A \"spike\" is an area where you've achieved unusual depth and excellence. Top universities look for students who are exceptional at something, not just well-rounded.\n\n\
         ---\n\n\
         **What Makes a Strong Spike:**\n\n\
         1. **Depth:** Going far beyond what's typical for a high school student\n\
         2. **Uniqueness:** Combining interests in a novel way\n\
         3. **Impact:** Creating something that affects others\n\
         4. **Recognition:** External validation (awards, publication, press coverage)\n\
         5. **Authenticity:** Genuine passion, not resume-building\n\n\
         ---\n\n\
         **Based on Your Profile:**\n\n\
         Your interests ({}) and strengths ({}) suggest several potential spike directions:\n\n\
         **Option 1: Deep Technical Achievement**\n\
         - Win national-level competitions in your field\n\
         - Publish research in academic journals\n\
         - Build something used by thousands of people\n\n\
         **Option 2: Entrepreneurial Impact**\n\
         - Start an organization that solves a real problem\n\
         - Build a product or service with real users\n\
         - Create measurable community impact\n\n\
         **Option 3: Research Excellence**\n\
         - Original research with university mentors\n\
         - Science fair success (ISEF, Regeneron STS)\n\
         - Academic publication or conference presentation\n\n\
         **Option 4: Creative + Technical Fusion**\n\
         - Combine your major with another interest uniquely\n\
         - Create a project that showcases interdisciplinary thinking\n\
         - Build something that doesn't fit traditional categories\n\n\
         ---\n\n\
         **Developing Your Spike:**\n\n\
         **Phase 1 - Foundation (Grade 9-10):**\n\
         - Build fundamental skills\n\
         - Explore to find genuine interests\n\
         - Start small projects and see what excites you\n\n\
         **Phase 2 - Focus (Grade 10-11):**\n\
         - Choose 1-2 primary areas\n\
         - Commit significant time (10+ hours/week)\n\
         - Seek mentors and advanced opportunities\n\n\
         **Phase 3 - Excellence (Grade 11-12):**\n\
         - Achieve recognition at highest possible level\n\
         - Create tangible, demonstrable impact\n\
         - Document everything for applications\n\n\
         ---\n\n\
         **Skills to Develop for {}:**\n\n",
        profile.intended_majors.join(", "),
        profile.strengths,
        primary(&profile.intended_majors, "your major"),
    );

    bullet_list(&mut out, major.skills);

    out.push_str(
        "\n---\n\n\
         **The Key Question:**\n\n\
         What can you become one of the best high school students in your state (or country) at? What would you do even if it didn't help your college application?\n\n\
         That intersection of passion and potential excellence is where your spike lives.\n\n\
         Would you like help developing a specific spike idea or planning how to take your current activities to the next level?",
    );

    out
}

fn waterloo_advice() -> String {
    String::from(
        "**Waterloo Admissions Strategy**\n\n\
         Waterloo, especially for CS and Engineering, has a unique admissions process. Here's how to approach it:\n\n\
         ---\n\n\
         **What Makes Waterloo Different:**\n\n\
         1. **AIF (Admission Information Form):** A mandatory form that's essentially their version of personal essays\n\
         2. **Contest Results:** CEMC contests (Euclid, CCC, etc.) carry significant weight\n\
         3. **Grade Focus:** Strong emphasis on math and relevant subject grades\n\
         4. **Co-op Program:** Unique 6-term work experience integrated into degree\n\n\
         ---\n\n\
         **CEMC Contests to Prioritize:**\n\n\
         **For CS/Software Engineering:**\n\
         - **CCC (Canadian Computing Competition):** Most important for CS\n\
           - Target: Junior Division Honor Roll → Senior Division top scores\n\
           - Prep: Past problems at cemc.uwaterloo.ca, USACO-style practice\n\n\
         **For Engineering/Math:**\n\
         - **Euclid Mathematics Contest:** Key for all engineering programs\n\
           - Target: Top 25% nationally, ideally Certificate of Distinction\n\
           - Prep: Past contests, Art of Problem Solving resources\n\n\
         **Other Valuable Contests:**\n\
         - Fermat, Cayley, Pascal (earlier grades)\n\
         - CIMC (Intermediate)\n\
         - Hypatia (for those who prefer proofs)\n\n\
         ---\n\n\
         **AIF Strategy:**\n\n\
         The AIF has several components:\n\
         1. **Extracurricular Activities:** Similar to Common App activities list\n\
         2. **Short Essays:** Explain your interest in the program, significant experiences\n\
         3. **Additional Information:** Explain any circumstances affecting your grades\n\n\
         **Tips:**\n\
         - Be specific and quantify your achievements\n\
         - Show genuine enthusiasm for the specific program\n\
         - Connect your experiences to why Waterloo is the right fit\n\
         - Mention co-op as a reason you're interested\n\n\
         ---\n\n\
         **Grade Expectations:**\n\n\
         **Computer Science:**\n\
         - Minimum cutoff: ~90% average\n\
         - Competitive: 95%+ with strong AIF and contests\n\n\
         **Software Engineering:**\n\
         - Even more competitive than CS\n\
         - Top grades + strong contests + excellent AIF needed\n\n\
         **Other Engineering Programs:**\n\
         - Requirements vary; check specific programs\n\
         - Math and science grades weighted heavily\n\n\
         ---\n\n\
         **Timeline for Waterloo:**\n\n\
         - **Grade 9-10:** Start CEMC contests, build programming skills\n\
         - **Grade 11:** Take CCC and Euclid, continue building profile\n\
         - **Grade 12 Fall:** Submit application through OUAC\n\
         - **December-February:** Complete AIF\n\
         - **February:** Take Euclid (final chance)\n\
         - **March-May:** Admission decisions released\n\n\
         ---\n\n\
         **Key Advice:**\n\n\
         1. Start CCC/Euclid prep early - these contests are hard to cram for\n\
         2. Your AIF matters as much as grades for borderline cases\n\
         3. Waterloo values technical skills and real projects over traditional ECs\n\
         4. Co-op interest should be genuine - it's a major part of the Waterloo experience\n\n\
         Would you like specific help with CCC preparation or AIF writing strategies?",
    )
}

fn general_advice(profile: &StudentProfile) -> String {
    let major = knowledge::major_category(classify::detect_major_category(&profile.intended_majors));
    let grade = knowledge::grade_advice(profile.grade_level);

    let headline_schools = profile
        .target_universities
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!(
        "**Let me help with your college admissions journey!**\n\n\
         Based on your profile and question, here are some thoughts:\n\n\
         ---\n\n\
         **Quick Profile Summary:**\n\
         - You're targeting {}\n\
         - Your intended major: {}\n\
         - Current strengths: {}\n\
         - Areas to develop: {}\n\n\
         ---\n\n\
         **Key Priorities for You Right Now:**\n\n",
        headline_schools,
        profile.intended_majors.join(", "),
        profile.strengths,
        profile.weaknesses,
    );

    bullet_list(&mut out, grade.priorities);

    out.push_str("\n---\n\n**Relevant Opportunities:**\n\n**Competitions:**\n");
    bullet_list(&mut out, &major.competitions[..major.competitions.len().min(3)]);

    out.push_str("\n**Summer Programs:**\n");
    bullet_list(
        &mut out,
        &major.summer_programs[..major.summer_programs.len().min(3)],
    );

    out.push_str(
        "\n---\n\n\
         **I can provide detailed guidance on:**\n\n\
         - **Course Planning:** What classes to take each year\n\
         - **Extracurriculars:** Building your activities and \"spike\"\n\
         - **Research:** Finding opportunities and designing projects\n\
         - **Competitions:** Which to prioritize and how to prepare\n\
         - **Essays:** Topic brainstorming and writing strategies\n\
         - **Summer Planning:** Programs and independent projects\n\
         - **Timeline:** When to do what in your admissions journey\n\
         - **Testing:** SAT/ACT strategies\n\
         - **Recommendations:** Getting strong letters\n\n\
         What specific area would you like to explore in more detail?",
    );

    out
}
