pub const FAQ: [(&str, &str); 8] = [
    (
        "How do I know which plant is right for me?",
        "Our plant directory includes detailed care information and difficulty levels for each plant. Start with beginner-friendly plants like Snake Plants or Pothos if you're new to plant care. Consider your living space's light conditions and how much time you can dedicate to plant care.",
    ),
    (
        "Can I save plants to view later?",
        "Yes! When you create an account, you can favorite plants and add them to your personal garden collection. This helps you keep track of plants you're interested in and those you already own.",
    ),
    (
        "Do I need to create an account to browse plants?",
        "No, you can browse all our plant information without an account. However, creating an account allows you to save favorites, track your plant collection, and personalize your ZenFlora experience.",
    ),
    (
        "How accurate is the plant care information?",
        "Our plant care information is curated from reputable horticultural sources and verified by plant care experts. However, care needs can vary based on your specific environment, so we recommend observing your plants and adjusting care accordingly.",
    ),
    (
        "Can I contribute plant information or corrections?",
        "We welcome community input! If you notice any inaccuracies or have suggestions for improvement, please use the contact form above or email us directly. We review all submissions carefully.",
    ),
    (
        "Is ZenFlora free to use?",
        "Yes, ZenFlora is completely free to use. Our mission is to make plant care knowledge accessible to everyone who wants to bring more peace and nature into their lives.",
    ),
    (
        "How do I reset my password?",
        "On the login page, click 'Forgot your password?' and enter your email address. You'll receive a password reset link via email. If you don't receive it, check your spam folder or contact us for assistance.",
    ),
    (
        "Can I delete my account?",
        "Yes, you can delete your account and all associated data by contacting us through this form. We'll process your request within 48 hours and confirm when your data has been removed.",
    ),
];
