use super::models::post::Post;

const DEFAULT_POSTS: [(&str, &str); 10] = [
    (
        "The Future of Remote Work",
        "Remote work has transformed how we approach productivity and work-life balance. Companies are discovering that flexible arrangements often lead to increased employee satisfaction and better results. The key is finding the right balance between autonomy and collaboration.",
    ),
    (
        "Sustainable Living Tips",
        "Small changes in our daily routines can make a big environmental impact. Try switching to reusable water bottles, composting organic waste, and choosing public transportation when possible. Every action counts toward a greener future.",
    ),
    (
        "Learning Python in 2024",
        "Python continues to be one of the most versatile programming languages. Whether you're interested in web development, data science, or automation, Python offers excellent libraries and frameworks. Start with the basics and build projects to solidify your understanding.",
    ),
    (
        "Coffee Culture Around the World",
        "From Italian espresso to Ethiopian coffee ceremonies, each culture has its unique relationship with coffee. Exploring different brewing methods and bean origins can transform your daily coffee routine into a global adventure.",
    ),
    (
        "The Art of Minimalism",
        "Minimalism isn't just about owning fewer things; it's about focusing on what truly matters. By decluttering our physical and mental spaces, we create room for experiences and relationships that bring genuine joy and fulfillment.",
    ),
    (
        "Urban Gardening for Beginners",
        "You don't need a large yard to grow your own food. Container gardening, vertical gardens, and windowsill herbs are perfect for apartment living. Start with easy plants like basil, mint, or cherry tomatoes to build your confidence.",
    ),
    (
        "Digital Photography Basics",
        "Great photos aren't just about expensive equipment. Understanding composition, lighting, and timing can dramatically improve your photography. Practice the rule of thirds, experiment with natural light, and don't be afraid to take multiple shots.",
    ),
    (
        "Healthy Meal Prep Strategies",
        "Spending a few hours on Sunday preparing meals can save time and promote healthier eating throughout the week. Focus on versatile ingredients that can be mixed and matched, and don't forget to include plenty of vegetables and lean proteins.",
    ),
    (
        "The Benefits of Reading Fiction",
        "Reading fiction does more than entertain; it builds empathy, improves vocabulary, and enhances critical thinking skills. Regular reading can reduce stress and provide a healthy escape from daily pressures while expanding our understanding of different perspectives.",
    ),
    (
        "Getting Started with Meditation",
        "Meditation doesn't require hours of practice or special equipment. Even five minutes of focused breathing can help reduce anxiety and improve concentration. Start small, be consistent, and remember that wandering thoughts are normal and part of the process.",
    ),
];

pub fn default_posts() -> Vec<Post> {
    DEFAULT_POSTS
        .iter()
        .map(|(title, content)| Post {
            title: title.to_string(),
            content: content.to_string(),
        })
        .collect()
}
