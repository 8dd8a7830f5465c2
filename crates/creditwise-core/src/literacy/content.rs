//! Static financial-literacy catalogs: lessons, daily tips, and the quiz
//! question bank.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub duration_minutes: u32,
    pub content: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTip {
    pub id: &'static str,
    pub tip: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options`.
    pub correct_answer: usize,
    pub explanation: &'static str,
    pub xp_reward: u64,
}

pub static LESSONS: [Lesson; 6] = [
    Lesson {
        id: "cibil-score",
        title: "What is CIBIL Score?",
        category: "Credit Basics",
        icon: "📊",
        duration_minutes: 2,
        content: "A CIBIL score is a 3-digit number (300-900) representing \
                  creditworthiness. Banks use it to approve loans; a higher \
                  score earns better rates. Key factors: payment history \
                  (35%), credit utilization (30%), credit age (15%), credit \
                  mix (10%), recent inquiries (10%). 750+ is excellent.",
    },
    Lesson {
        id: "emi-basics",
        title: "Understanding EMI",
        category: "Loans",
        icon: "💰",
        duration_minutes: 2,
        content: "EMI (Equated Monthly Installment) is the fixed monthly \
                  repayment on a loan: EMI = P*R*(1+R)^N / ((1+R)^N - 1) with \
                  monthly rate R. Shorter tenure means a higher EMI but less \
                  total interest; prepaying saves interest.",
    },
    Lesson {
        id: "interest-rates",
        title: "Interest Rates Explained",
        category: "Finance",
        icon: "📈",
        duration_minutes: 2,
        content: "The interest rate is the cost of borrowing, as a \
                  percentage. Fixed rates stay constant; floating rates move \
                  with the market. Typical bands: home loans 8-10%, personal \
                  loans 10-16%, credit cards 24-42%. A 750+ score, shorter \
                  tenure, and comparing lenders all earn lower rates.",
    },
    Lesson {
        id: "credit-utilization",
        title: "Credit Utilization Ratio",
        category: "Credit Basics",
        icon: "🎯",
        duration_minutes: 2,
        content: "Utilization is credit used divided by total limit. Below \
                  30% is excellent; above 70% hurts the score. Pay balances \
                  regularly, keep old cards open, and spread purchases to \
                  stay low.",
    },
    Lesson {
        id: "loan-types",
        title: "Types of Loans",
        category: "Loans",
        icon: "🏦",
        duration_minutes: 2,
        content: "Secured loans (home, car, gold) are backed by collateral \
                  and carry lower rates but risk the asset. Unsecured loans \
                  (personal, credit cards) approve faster at higher rates. \
                  Choose secured for large, long loans; unsecured for small, \
                  short ones.",
    },
    Lesson {
        id: "debt-management",
        title: "Smart Debt Management",
        category: "Finance",
        icon: "💡",
        duration_minutes: 2,
        content: "Budget 50% essentials / 30% lifestyle / 20% savings and \
                  debt repayment. Repay by avalanche (highest rate first, \
                  cheapest) or snowball (smallest first, motivating). Warning \
                  signs: EMI above 50% of income, missed deadlines, borrowing \
                  to repay. Keep a 6-month emergency fund.",
    },
];

pub static DAILY_TIPS: [DailyTip; 6] = [
    DailyTip {
        id: "tip1",
        tip: "Pay your credit card bills in full before the due date to avoid \
              interest charges and maintain a good credit score.",
        category: "Credit Cards",
    },
    DailyTip {
        id: "tip2",
        tip: "Keep your credit utilization below 30% for a healthy credit \
              score. If your limit is ₹1 lakh, use less than ₹30,000.",
        category: "Credit Score",
    },
    DailyTip {
        id: "tip3",
        tip: "Check your CIBIL score for free once a year to catch errors and \
              monitor your credit health.",
        category: "Credit Monitoring",
    },
    DailyTip {
        id: "tip4",
        tip: "EMI should not exceed 40% of your monthly income to maintain \
              financial stability.",
        category: "Loans",
    },
    DailyTip {
        id: "tip5",
        tip: "Avoid taking multiple loans at once - it signals financial \
              stress to lenders and hurts your credit score.",
        category: "Loans",
    },
    DailyTip {
        id: "tip6",
        tip: "Build an emergency fund of 6 months expenses before taking on \
              major debt like home loans.",
        category: "Financial Planning",
    },
];

pub static QUIZ_QUESTIONS: [QuizQuestion; 6] = [
    QuizQuestion {
        id: "q1",
        question: "What is a good CIBIL score for loan approval?",
        options: ["Below 600", "600-700", "700-750", "Above 750"],
        correct_answer: 3,
        explanation: "A CIBIL score above 750 is considered excellent and \
                      significantly improves your chances of loan approval \
                      with better interest rates.",
        xp_reward: 20,
    },
    QuizQuestion {
        id: "q2",
        question: "What does EMI stand for?",
        options: [
            "Easy Monthly Income",
            "Equated Monthly Installment",
            "Equal Money Investment",
            "Estimated Monthly Interest",
        ],
        correct_answer: 1,
        explanation: "EMI stands for Equated Monthly Installment - a fixed \
                      payment you make each month to repay a loan.",
        xp_reward: 15,
    },
    QuizQuestion {
        id: "q3",
        question: "What is the ideal credit utilization ratio?",
        options: ["Below 10%", "Below 30%", "Below 50%", "Below 70%"],
        correct_answer: 1,
        explanation: "Keeping credit utilization below 30% is ideal for \
                      maintaining a healthy credit score.",
        xp_reward: 20,
    },
    QuizQuestion {
        id: "q4",
        question: "Which type of loan typically has the lowest interest rate?",
        options: ["Personal Loan", "Credit Card", "Home Loan", "Gold Loan"],
        correct_answer: 2,
        explanation: "Home loans typically have the lowest interest rates \
                      (8-10%) because they are secured by property.",
        xp_reward: 15,
    },
    QuizQuestion {
        id: "q5",
        question: "How often should you check your credit report?",
        options: ["Monthly", "Quarterly", "Annually", "Never"],
        correct_answer: 2,
        explanation: "You should check your credit report at least once a \
                      year to catch errors and monitor your credit health.",
        xp_reward: 15,
    },
    QuizQuestion {
        id: "q6",
        question: "What percentage of income should your EMI not exceed?",
        options: ["20%", "30%", "40%", "50%"],
        correct_answer: 2,
        explanation: "Your total EMI payments should not exceed 40% of your \
                      monthly income to maintain financial stability.",
        xp_reward: 20,
    },
];
