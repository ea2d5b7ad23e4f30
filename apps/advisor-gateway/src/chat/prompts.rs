// Fixed texts used by the chat flow: the default query for file-only sends,
// starter questions, and the offline advice templates.

/// Query sent when the user attaches files without typing anything.
pub const DEFAULT_ATTACHMENT_QUERY: &str =
    "Please analyze the uploaded files and provide career advice.";

/// Starter prompts the UI shows on an empty transcript.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "How can I improve my resume for tech roles?",
    "What's the STAR method for interviews?",
    "How do I negotiate a better salary?",
    "What skills should I learn this year?",
];

pub const RESUME_TEMPLATE: &str = "Great question about resumes! Here are my top recommendations:\n\n\
✅ **Key Resume Tips:**\n\
• Tailor it for each position - match keywords from the job description\n\
• Use action verbs (Led, Developed, Increased, Optimized)\n\
• Quantify your achievements with numbers and percentages\n\
• Keep formatting clean and scannable - use bullet points\n\
• Aim for 1-2 pages; 3 pages max for 10+ years experience\n\
• Include relevant skills section highlighting technical competencies\n\
• Use power words that match the job description\n\n\
📊 **ATS Optimization:**\n\
• Use standard fonts and formatting\n\
• Include relevant keywords without keyword stuffing\n\
• Avoid tables, images, and complex graphics\n\
• Save as PDF to preserve formatting\n\n\
Would you like me to analyze your resume? Upload it in the Resume Analysis section!";

pub const INTERVIEW_TEMPLATE: &str = "Excellent - interview prep is crucial! Here's my comprehensive guide:\n\n\
🎯 **Before the Interview:**\n\
• Research the company thoroughly - mission, values, recent news\n\
• Study the job description and prepare examples\n\
• Prepare 3-5 questions to ask the interviewer\n\
• Test your tech setup if it's a video interview\n\
• Prepare copies of your resume\n\n\
⭐ **During the Interview - STAR Method:**\n\
Structure your answers:\n\
• **Situation** - Set the context\n\
• **Task** - Describe your responsibility\n\
• **Action** - Explain what you did\n\
• **Result** - Share the positive outcome with metrics\n\n\
💡 **Top Questions to Prepare:**\n\
• Tell me about yourself\n\
• Why do you want this role?\n\
• What's your greatest strength/weakness?\n\
• Describe your experience with [key skill]\n\
• How do you handle conflict/pressure?\n\n\
Use our Interview Prep tool for 25+ AI-generated practice questions!";

pub const SALARY_TEMPLATE: &str = "Smart salary negotiation is a crucial skill! Here's my detailed strategy:\n\n\
💰 **Research Phase:**\n\
• Check Glassdoor, LinkedIn Salary, Payscale, Levels.fyi\n\
• Consider location, company size, and your experience\n\
• Build a range: minimum, target, and ideal salary\n\
• Factor in total compensation (bonuses, stock, benefits)\n\n\
🤝 **Negotiation Strategy:**\n\
• Let them make the first offer\n\
• Don't share your previous salary\n\
• Use collaborative language (\"I'm excited about this, and...\") \n\
• Build your case with market data\n\
• Consider non-monetary benefits (remote work, flexibility, growth)\n\
• Get the offer in writing\n\n\
📈 **Leverage Points:**\n\
• Your specific skills and experience\n\
• Market rates for your role\n\
• Your track record of results\n\
• Additional responsibilities you'll take on\n\n\
Use our Salary Negotiation tool for personalized insights!";

pub const COVER_LETTER_TEMPLATE: &str = "Creating engaging cover letters is an art and science! Here's how to shine:\n\n\
✍️ **Structure:**\n\
• **Header** - Your contact info and date\n\
• **Opening** - Hook them immediately (why this company matters to you)\n\
• **Body** - 2-3 paragraphs connecting your experience to their needs\n\
• **Closing** - Call to action and thank you\n\n\
🌟 **Writing Tips:**\n\
• Personalize it for each company (use their name, products, news)\n\
• Show enthusiasm and genuine interest\n\
• Use the same keywords from the job posting\n\
• Tell a story - don't just repeat your resume\n\
• Keep it to 250-400 words\n\
• Use a professional tone but show your personality\n\
• Proofread 3 times!\n\n\
✅ **What Hiring Managers Want:**\n\
• Why you specifically want this role\n\
• How your experience solves their problems\n\
• Examples of your impact\n\
• Understanding of their company/industry\n\n\
Generate personalized cover letters instantly with our AI tool!";

pub const JOB_SEARCH_TEMPLATE: &str = "Finding the right job requires strategy! Here's my playbook:\n\n\
🔍 **Job Search Strategy:**\n\
• Use multiple platforms: LinkedIn, Indeed, company websites\n\
• Set up job alerts for your target roles\n\
• Follow companies you're interested in\n\
• Join relevant communities and forums\n\
• Customize each application\n\
• Track your applications\n\n\
🤝 **Networking (most effective!):**\n\
• 70% of jobs are found through networking\n\
• Reach out to contacts on LinkedIn\n\
• Attend industry meetups and conferences\n\
• Informational interviews with professionals\n\
• Engage with LinkedIn posts in your field\n\
• Join online communities in your niche\n\n\
📝 **Application Tips:**\n\
• Customize cover letter and resume for each role\n\
• Highlight keywords from job description\n\
• Show enthusiasm and specific interest\n\
• Follow application instructions exactly\n\
• Include portfolio links if applicable\n\n\
⏰ **Follow Up:**\n\
• Wait 5-7 business days before following up\n\
• Keep it polite and brief\n\
• Reference the specific position\n\
• Reiterate your interest\n\n\
Explore our Job Search feature to discover opportunities!";

pub const SKILLS_TEMPLATE: &str = "Great initiative on skill development! Here's a learning roadmap:\n\n\
📚 **Best Learning Resources:**\n\
• **Free**: Coursera Audit, YouTube, freeCodeCamp, Udemy free courses\n\
• **Paid**: Coursera, Udemy, Pluralsight, Codecademy, Skillshare\n\
• **Practice**: LeetCode, HackerRank, GitHub projects\n\
• **Earn Certs**: Google Career Certificates, AWS certifications\n\n\
🎯 **Learning Strategy:**\n\
• Focus on 1-2 skills at a time\n\
• Combine theory with practice projects\n\
• Build real projects for your portfolio\n\
• Share your projects on GitHub\n\
• Join communities (Reddit, Discord, Slack)\n\
• Complete practice challenges\n\n\
📈 **Building Your Portfolio:**\n\
• Create 3-5 portfolio projects\n\
• Show your growth over time\n\
• Include links in your resume\n\
• Document your process\n\
• Contributed to open source\n\n\
⏱️ **Learning Timeline:**\n\
• Beginner to intermediate: 3-6 months\n\
• Intermediate to advanced: 6-12 months\n\
• Consistency beats intensity\n\n\
What skill are you looking to develop?";

pub const GENERAL_TEMPLATE: &str = "👋 **Welcome to Your AI Career Assistant!**\n\n\
I'm here to help you with:\n\n\
📄 **Resumes** - Tips, optimization, ATS strategies\n\
💬 **Interviews** - Prep, questions, STAR method\n\
💰 **Salary** - Negotiation, market research, offers\n\
✍️ **Cover Letters** - Writing tips and best practices\n\
🎯 **Job Search** - Strategies, networking, applications\n\
🎓 **Skills** - Learning paths and development\n\n\
**Or ask me anything about:**\n\
• Career transitions\n\
• Freelancing/consulting\n\
• Remote work\n\
• Career growth\n\
• Professional development\n\n\
📌 **Pro Tips:**\n\
• Use our specialized tools for detailed analysis\n\
• Combine practical advice with actionable tools\n\
• Your journey is unique - customize advice to your situation\n\n\
What's your biggest career challenge right now?";
