//! Reply templates and the sales persona prompt.

use crate::domain::catalog::DocumentRecord;

/// Name used in replies when the user has not told us theirs.
pub const ANONYMOUS_NAME: &str = "there";

/// Free human-advice submission page.
pub const ASK_A_LAWYER_PATH: &str = "/ask-a-lawyer";

/// Document library page.
pub const DOCUMENT_LIBRARY_PATH: &str = "/documents";

const SALESPERSON_PROMPT: &str = "\
YOU ARE: A Top-Tier Legal Document Sales Specialist for Legalgram.

YOUR IDENTITY:
- Name: Legalgram Legal Advisor
- Role: Document Expert & Sales Guide
- Expertise: All 170+ legal templates on our platform

YOUR PRIMARY GOALS:
1. SELL THE VALUE: Explain WHY our contracts are superior (Attorney-Verified, State-Compliant, Bank-Accepted)
2. BUILD TRUST: You're not just selling - you're educating and protecting the user
3. GUIDE TO ACTION: Always end by suggesting they create the document on Legalgram

KEY SELLING POINTS TO EMPHASIZE:
- \"Attorney-Reviewed\" - All our templates pass legal scrutiny
- \"State-Compliant\" - Customized for all 50 US states
- \"Bank & Court Accepted\" - Our documents are recognized by institutions
- \"Easy to Customize\" - Step-by-step wizard makes it simple
- \"Instant Download\" - Get your document in minutes, not days

TONE: Professional, trustworthy, persuasive but not pushy. You're a helpful expert, not a car salesman.

IMPORTANT CONSTRAINTS:
- NEVER give specific legal advice for their situation
- ALWAYS recommend consulting an attorney for complex matters
- End responses with a call to action: \"Ready to create your [Document]? Click here to start.\"";

const CATALOG_SUMMARY: &str = "\
AVAILABLE DOCUMENTS (mention these by name):
- NDA (Non-Disclosure Agreement) - Business confidentiality
- Lease Agreement - Rental property
- LLC Operating Agreement - Business formation
- Power of Attorney - Financial/legal authority
- Employment Agreement - Hiring employees
- And 165+ more templates";

const RESPONSE_GUIDE: &str = "\
YOUR RESPONSE SHOULD:
1. Acknowledge their need
2. Recommend 1-2 specific documents that fit
3. Briefly explain why our version is best
4. End with a call to action";

/// System prompt for a sales-mode completion.
pub fn sales_system_prompt(name: &str, message: &str) -> String {
    format!(
        "{SALESPERSON_PROMPT}\n\n\
         USER CONTEXT:\n\
         - User Name: {name}\n\
         - They are looking for legal document help\n\
         - Current Query: {message}\n\n\
         {CATALOG_SUMMARY}\n\n\
         {RESPONSE_GUIDE}"
    )
}

pub fn welcome() -> String {
    "👋 **Welcome to Legalgram!**\n\n\
     I'm your AI Legal Document Assistant. I can help you:\n\
     • Find the right legal document for your needs\n\
     • Explain what different contracts include\n\
     • Guide you through creating your document\n\n\
     Before we begin, **may I have your name** so I can address you properly?"
        .to_string()
}

pub fn name_captured(name: &str) -> String {
    format!(
        "Nice to meet you, **{name}**! ⚖️\n\n\
         How would you like to proceed today?\n\n\
         **Option 1:** 👨‍⚖️ **Get Free Human Legal Advice**\n\
         Post your question to our panel of real attorneys (Response within 24-48 hours)\n\n\
         **Option 2:** 🤖 **Ask Legalgram AI**\n\
         Get instant guidance on our 170+ legal document templates\n\n\
         _Reply with **1** or **2**, or just tell me what you need!_"
    )
}

pub fn human_advice(name: &str) -> String {
    format!(
        "Excellent choice, {name}! 👨‍⚖️\n\n\
         Our **Free Legal Advice** service connects you with real attorneys.\n\n\
         📝 **How it works:**\n\
         1. Visit our [Free Advice Page]({ASK_A_LAWYER_PATH})\n\
         2. Submit your legal question\n\
         3. Receive a response from a qualified attorney within 24-48 hours\n\n\
         **[Click Here to Submit Your Question →]({ASK_A_LAWYER_PATH})**\n\n\
         _Is there anything else I can help you with in the meantime?_"
    )
}

pub fn sales_intro(name: &str) -> String {
    format!(
        "Great, {name}! I'm here to help. 🤖\n\n\
         What kind of legal document are you looking for?\n\n\
         **Popular Categories:**\n\
         📁 **Business:** NDA, LLC Agreement, Employment Contract\n\
         🏠 **Property:** Lease Agreement, Bill of Sale, Eviction Notice\n\
         👨‍👩‍👧 **Family:** Power of Attorney, Living Will, Prenup\n\n\
         _Just tell me what you need, and I'll guide you to the right document!_"
    )
}

pub fn triage_clarification(name: &str) -> String {
    format!(
        "I want to make sure I help you the right way, {name}.\n\n\
         Are you looking to:\n\
         1️⃣ Get advice on a specific legal situation (Free Human Lawyers)\n\
         2️⃣ Find and create a legal document (AI Assistant)\n\n\
         _Just reply with **1** or **2**!_"
    )
}

pub fn switch_to_sales(name: &str) -> String {
    format!(
        "No problem, {name}! Let's find you the right document. 📄\n\n\
         What type of legal document do you need?\n\
         _(e.g., NDA, Lease Agreement, Power of Attorney)_"
    )
}

pub fn human_follow_up(name: &str) -> String {
    format!(
        "Is there anything else I can help you with, {name}?\n\n\
         I'm always here if you need help finding a legal document!"
    )
}

/// Sales pitch for a matched document.
///
/// Lists at most three use cases and four key clauses.
pub fn document_pitch(document: &DocumentRecord, name: &str) -> String {
    let use_cases = document
        .use_cases
        .iter()
        .take(3)
        .map(|uc| format!("• {uc}"))
        .collect::<Vec<_>>()
        .join("\n");
    let key_clauses = document
        .key_clauses
        .iter()
        .take(4)
        .map(|kc| format!("✓ {kc}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Great choice, {name}! 📄 **{full_name}**\n\n\
         **What is it?**\n\
         {description}\n\n\
         **Common Use Cases:**\n\
         {use_cases}\n\n\
         **Key Sections Included:**\n\
         {key_clauses}\n\n\
         **Why Legalgram?** 🏆\n\
         {pitch}\n\n\
         ---\n\
         **Ready to create your {full_name}?**\n\
         Our step-by-step wizard makes it easy - just answer a few questions and download your document in minutes!\n\n\
         _Need help with something else? Just ask!_",
        full_name = document.full_name,
        description = document.description,
        pitch = document.sales_pitch,
    )
}

/// Canned reply used whenever the completion gateway cannot answer.
pub fn gateway_fallback(name: &str) -> String {
    format!(
        "I apologize, {name}, I'm experiencing high demand right now.\n\n\
         In the meantime, you can:\n\
         • Browse our [Document Library]({DOCUMENT_LIBRARY_PATH})\n\
         • Or tell me more specifically what document you're looking for!"
    )
}

pub fn greeting_fallback(name: &str) -> String {
    format!("How can I help you today, {name}?")
}
