//! Built-in VENASIC rule set
//!
//! Business facts (pricing, feature list, links) are literal template text.

use crate::domain::{KeywordTable, LanguagePack, ResponseTemplates};

const WHATSAPP_LINK: &str = "https://wa.me/94765329117";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// English (primary) tables
pub fn english() -> LanguagePack {
    LanguagePack {
        affirmative_token: "yes".to_string(),
        keywords: KeywordTable {
            greeting: strings(&["hi", "hello", "sup", "good morning", "good evening"]),
            identity: strings(&[
                "who are you",
                "who is this",
                "what is your name",
                "who am i talking to",
            ]),
            wellbeing: strings(&["how are you", "how r u", "how’s it going"]),
            wellbeing_affirmative: strings(&["i’m good", "i am good", "im good", "fine"]),
            price: strings(&["price", "package", "web design price", "website cost"]),
            services: strings(&["services", "what do you offer", "services list"]),
            website: strings(&["website", "web", "web development", "web dev"]),
            contact: strings(&["contact", "phone", "call", "mobile", "whatsapp"]),
        },
        responses: ResponseTemplates {
            greetings: strings(&[
                "Hello! Welcome to VENASIC. Would you like to know about our website projects? 😊",
                "Hey there 👋 Welcome to VENASIC! Want to hear about our 3D website designs?",
                "Howdy!🤠 VENASIC here 🌐 Would you like details about our web projects?",
            ]),
            identity: strings(&[
                "I’m Elina 💁\u{200d}♀\u{fe0f}, a virtual AI assistant designed and handcrafted by VENASIC.",
                "My name’s Elina 💁\u{200d}♀\u{fe0f} — a digital AI bot created by VENASIC to assist you with website projects.",
                "Hi, I’m Elina 💁\u{200d}♀\u{fe0f}. I’m an AI chatbot built by VENASIC to help you with your 3D web development needs.",
            ]),
            wellbeing_ack: "I’m fine. How about you?".to_string(),
            service_offer:
                "I'm glad to hear it! Would you like to know about our 3D web development services?"
                    .to_string(),
            service_details: format!(
                "Instead of an old 2D website, get a 3D Animated Website for your business! \
Yes, you can get an international-level website starting from Rs. 40,000.

Features you get from Venas International:

1. Free domain for the first year
2. Choose your custom animations
3. Lifetime free hosting
4. 12 free adverts (10 images + 2 videos)
5. Lifetime free website security
6. Free AI chatbot (can chat with many customers at once)

You can create your website using one of these three options:

1. Static Websites (e.g., rc7salon.com)
2. JavaScript Frameworks (e.g., ucolcampus.com)
3. Full-Stack Frameworks

Contact us today on WhatsApp: {WHATSAPP_LINK}"
            ),
            prices: strings(&[
                "Our 3D Animated Website packages start from Rs. 40,000 💻 Contact us to customize your package!",
                "Get your 3D business website starting from Rs. 40,000 🌐 Let’s discuss the best plan for you.",
                "3D Animated Websites by VENASIC start at Rs. 40,000 🚀 Reach out to tailor one for your business.",
            ]),
            services: "Here’s what VENASIC offers:

1. 3D Animated Websites
2. Static Websites
3. JavaScript Framework Websites
4. Full-Stack Web Applications
5. Free AI chatbot for your website

Packages start from Rs. 40,000 💻"
                .to_string(),
            website: format!(
                "Take a look at some of our recent projects:

🌐 rc7salon.com
🌐 ucolcampus.com

WhatsApp us to start yours: {WHATSAPP_LINK}"
            ),
            contact: format!(
                "Thanks! A VENASIC team member will call you shortly 📞 \
You can also reach us on WhatsApp: {WHATSAPP_LINK}"
            ),
            fallbacks: strings(&[
                "Thanks for messaging VENASIC! Our team will contact you shortly about your 3D web development project.",
                "We’ve received your message 🙏 A VENASIC representative will reach out soon regarding your website project.",
                "Thank you! One of our web specialists will connect with you shortly to discuss your 3D website ideas 🚀",
            ]),
        },
    }
}

/// Sinhala (secondary) tables
pub fn sinhala() -> LanguagePack {
    LanguagePack {
        affirmative_token: "ඔව්".to_string(),
        keywords: KeywordTable {
            greeting: strings(&[
                "හෙලෝ",
                "ආයුබෝවන්",
                "සුබ උදෑසනක්",
                "සුබ සන්ධ්\u{200d}යාවක්",
            ]),
            identity: strings(&["ඔයා කවුද", "මෙය කවුද", "ඔබ කවුද", "ඔයාගේ නම මොකක්ද"]),
            wellbeing: strings(&["ඔබට කොහොමද", "ඔබට කෙසේද"]),
            wellbeing_affirmative: strings(&["හොඳින්", "මම හොඳින් සිටිනවා"]),
            price: strings(&["මිල", "පැකේජ්", "වෙබ් ඩිසැයින් මිල", "website cost"]),
            services: strings(&["සේවාවන්", "ඔබ ලබාදෙන සේවාවන්", "සේවා ලැයිස්තුව"]),
            website: strings(&["වෙබ්සයිට්", "වෙබ්අඩවිය", "වෙබ් ඩිසැයින්", "වෙබ් dev"]),
            contact: strings(&["සම්බන්ධ වීම", "දුරකථන", "දුරකථනය", "මොබයිල්", "whatsapp"]),
        },
        responses: ResponseTemplates {
            greetings: strings(&[
                "ආයුබෝවන්! VENASIC වෙත සාදරයෙන් පිලිගනිමු. ඔබට අපේ වෙබ්සයිට් ව්\u{200d}යාපෘති පිලිබද තොරතුරු ලබාදෙන්නද? 😊",
                "හෙලෝ 👋 VENASIC වෙතින් ඔබව පිලිගනිමු! ඔබට අපේ වෙබ්සයිට් සේවාවන් ගැන දැනගන්න අවශ්\u{200d}යද?",
                "සුභ දවසක්! VENASIC වෙත සාදරයෙන් පිලිගනිමු 💫 වෙබ්සයිට් ව්\u{200d}යාපෘති ගැන කතාකරමුද?",
            ]),
            identity: strings(&[
                "මම Elina 💁\u{200d}♀\u{fe0f}, VENASIC විසින් නිර්මාණය කර හා විශේෂ ලෙස නිමවා ඇති ව්\u{200d}යවසායක AI චාට්බොට් එකක්.",
                "මම Elina 💁\u{200d}♀\u{fe0f} — VENASIC විසින් නිර්මාණය කරපු virtual AI bot කෙනෙක්. ඔබට උදව් කරන්න මම ඉන්නෙයි!",
                "මම VENASIC Elina 💁\u{200d}♀\u{fe0f}. මගේ අරමුණ ඔයාට වෙබ් ව්\u{200d}යාපෘති ගැන අවශ්\u{200d}ය සියලුම තොරතුරු ලබා දීමයි.",
            ]),
            wellbeing_ack: "මම හොඳින් සිටිනවා. ඔබට කොහොමද?".to_string(),
            service_offer: "ඔබ හොඳින් සිටින බව ඇසීමට සතුටුයි! ඔබට අපේ 3D web development services ගැන දැනගන්න ඕනේද?"
                .to_string(),
            service_details: format!(
                "පරණ තාලේ 2D වෙබ්සයිට් එකක් වෙනුවට 3D Animated වෙබ්සයිට් එකක් ඔයාගේ බිස්නස් එකට? \
ඔව්, මේ ජාත්යන්තර මට්ටමේ Website එක Rs. 40,000 සිට හදාගන්න දැන් ඔයාටත් අවස්ථාව තියෙනවා.

අපෙන් ලැබෙන විශේෂාංග:

1. Domain එක පලමු වසර නොමිලේ
2. Custom animations ඔබට තෝරාගන්න පුළුවන්
3. Website එකට lifetime free hosting
4. නොමිලේ වෙලද දැන්වීම් 12ක් (10 adverts and 2 videos)
5. Website security lifetime free
6. Free AI chatbot (පාරිභෝගිකයන් සමග එකවර කතා කළ හැක)

ඔබට අවශ්\u{200d}යම වන්නේ පහත ක්\u{200d}රම තුනෙන් එකක්:

1. Static Websites (ตัวอย่าง: rc7salon.com)
2. JavaScript Frameworks (ตัวอย่าง: ucolcampus.com)
3. Full-Stack Frameworks

අදම WhatsApp කරන්න: {WHATSAPP_LINK}"
            ),
            prices: strings(&[
                "අපේ 3D Animated Website පැකේජයන් රු. 40,000 සිට ආරම්භ වේ 💻 ඔබට අවශ්\u{200d}ය විදිහට පැකේජය සකසා ගැනීමට අප අමතන්න!",
                "ඔබේ ව්\u{200d}යාපාරයට 3D වෙබ්සයිට් එකක් රු. 40,000 සිට! වැඩි විස්තර සඳහා අප හා සම්බන්ධ වන්න 🌐",
                "VENASIC වෙතින් 3D Animated වෙබ්සයිට් පැකේජයන් රු. 40,000 සිට ලැබෙනවා 🚀 ඔබට පහසු විදිහට එකක් සකසා ගන්න.",
            ]),
            services: "VENASIC අපෙන් ලැබෙන සේවාවන්:

1. 3D Animated වෙබ්සයිට්
2. Static Websites
3. JavaScript Framework වෙබ්සයිට්
4. Full-Stack වෙබ් යෙදුම්
5. ඔබේ වෙබ්සයිට් එකට නොමිලේ AI chatbot එකක්

පැකේජ රු. 40,000 සිට ආරම්භ වේ 💻"
                .to_string(),
            website: format!(
                "අපේ මෑත ව්\u{200d}යාපෘති කිහිපයක් බලන්න:

🌐 rc7salon.com
🌐 ucolcampus.com

ඔබේ වෙබ්සයිට් එක පටන් ගන්න WhatsApp කරන්න: {WHATSAPP_LINK}"
            ),
            contact: format!(
                "ස්තූතියි! VENASIC කණ්ඩායමේ සාමාජිකයෙක් ඉක්මනින් ඔබව අමතනු ඇත 📞 \
ඔබට WhatsApp හරහාද අප හා සම්බන්ධ විය හැක: {WHATSAPP_LINK}"
            ),
            fallbacks: strings(&[
                "VENASIC වෙත පණිවිඩය එවීම සඳහා ස්තූතියි! ඔබේ 3D web development ව්\u{200d}යාපෘතිය සදහා අපගේ නියෝජිතයෙක් ඉක්මනින් ඔබව සම්බන්ධ කරගනී.",
                "ඔබේ පණිවිඩය අපට ලැබුණා 🙏 VENASIC කණ්ඩායම ඔබගේ 3D වෙබ්සයිට් අවශ්\u{200d}යතා පිළිබඳව ඉක්මනින් සම්බන්ධ වනු ඇත.",
                "ස්තූතියි! VENASIC වෙතින් නියෝජිතයෙක් ඔබගේ web project එක ගැන කතා කිරීමට ඉක්මනින්ම ඔබව අමතනු ඇත 🚀",
            ]),
        },
    }
}
