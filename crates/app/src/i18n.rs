//! Interface languages and the translation context consumed by the pages.
//!
//! The supported set, flag glyphs, and native names live in one set of
//! static tables; every consumer resolves codes through [`Lang`], so an
//! unknown persisted code can only ever fall back to the default.

use dioxus::prelude::*;

use crate::storage;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Es,
    Fr,
    De,
    Pt,
    Ru,
    Tr,
    It,
    Ar,
    Zh,
    Ja,
    Ko,
    Ig,
    Ha,
    Yo,
    Hi,
    Bn,
    Pcm,
}

/// All supported languages in menu display order.
pub const ALL_LANGS: &[Lang] = &[
    Lang::En,
    Lang::Es,
    Lang::Fr,
    Lang::De,
    Lang::Pt,
    Lang::Ru,
    Lang::Tr,
    Lang::It,
    Lang::Ar,
    Lang::Zh,
    Lang::Ja,
    Lang::Ko,
    Lang::Ig,
    Lang::Ha,
    Lang::Yo,
    Lang::Hi,
    Lang::Bn,
    Lang::Pcm,
];

impl Lang {
    /// Locale code used for storage and the trigger display.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::De => "de",
            Lang::Pt => "pt",
            Lang::Ru => "ru",
            Lang::Tr => "tr",
            Lang::It => "it",
            Lang::Ar => "ar",
            Lang::Zh => "zh",
            Lang::Ja => "ja",
            Lang::Ko => "ko",
            Lang::Ig => "ig",
            Lang::Ha => "ha",
            Lang::Yo => "yo",
            Lang::Hi => "hi",
            Lang::Bn => "bn",
            Lang::Pcm => "pcm",
        }
    }

    /// Parse a locale code, tolerating region subtags ("en-US", "pt_BR").
    /// Unknown codes return `None`; callers that need a display value go
    /// through [`lang_or_default`].
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            "fr" => Some(Lang::Fr),
            "de" => Some(Lang::De),
            "pt" => Some(Lang::Pt),
            "ru" => Some(Lang::Ru),
            "tr" => Some(Lang::Tr),
            "it" => Some(Lang::It),
            "ar" => Some(Lang::Ar),
            "zh" => Some(Lang::Zh),
            "ja" => Some(Lang::Ja),
            "ko" => Some(Lang::Ko),
            "ig" => Some(Lang::Ig),
            "ha" => Some(Lang::Ha),
            "yo" => Some(Lang::Yo),
            "hi" => Some(Lang::Hi),
            "bn" => Some(Lang::Bn),
            "pcm" => Some(Lang::Pcm),
            _ => None,
        }
    }

    /// Flag glyph shown next to the code.
    pub fn flag(self) -> &'static str {
        match self {
            Lang::En => "🇺🇸",
            Lang::Es => "🇪🇸",
            Lang::Fr => "🇫🇷",
            Lang::De => "🇩🇪",
            Lang::Pt => "🇵🇹",
            Lang::Ru => "🇷🇺",
            Lang::Tr => "🇹🇷",
            Lang::It => "🇮🇹",
            Lang::Ar => "🇸🇦",
            Lang::Zh => "🇨🇳",
            Lang::Ja => "🇯🇵",
            Lang::Ko => "🇰🇷",
            Lang::Ig | Lang::Ha | Lang::Yo | Lang::Pcm => "🇳🇬",
            Lang::Hi => "🇮🇳",
            Lang::Bn => "🇧🇩",
        }
    }

    /// Name of the language in the language itself, for the menu options.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
            Lang::Fr => "Français",
            Lang::De => "Deutsch",
            Lang::Pt => "Português",
            Lang::Ru => "Русский",
            Lang::Tr => "Türkçe",
            Lang::It => "Italiano",
            Lang::Ar => "العربية",
            Lang::Zh => "中文",
            Lang::Ja => "日本語",
            Lang::Ko => "한국어",
            Lang::Ig => "Igbo",
            Lang::Ha => "Hausa",
            Lang::Yo => "Yoruba",
            Lang::Hi => "हिंदी",
            Lang::Bn => "বাংলা",
            Lang::Pcm => "Pidgin",
        }
    }
}

/// Resolve a possibly-unknown code, falling back to the default language
/// (and therefore its glyph).
pub fn lang_or_default(code: &str) -> Lang {
    Lang::from_code(code).unwrap_or_default()
}

/// Keys for the localized interface strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    HeroTitle,
    HeroSubtitle,
    FeatureEmail,
    FeatureSpeed,
    FeatureSecurity,
    FormTitle,
    FormSubtitle,
    EmailLabel,
    EmailPlaceholder,
    SubmitButton,
    ResetSuccess,
    ResetError,
    BackText,
    BackLink,
    SignInTitle,
    SignInSubtitle,
    ForgotLink,
}

/// One language's complete set of interface strings.
struct Strings {
    hero_title: &'static str,
    hero_subtitle: &'static str,
    feature_email: &'static str,
    feature_speed: &'static str,
    feature_security: &'static str,
    form_title: &'static str,
    form_subtitle: &'static str,
    email_label: &'static str,
    email_placeholder: &'static str,
    submit_button: &'static str,
    reset_success: &'static str,
    reset_error: &'static str,
    back_text: &'static str,
    back_link: &'static str,
    sign_in_title: &'static str,
    sign_in_subtitle: &'static str,
    forgot_link: &'static str,
}

/// Look up a display string by key.
pub fn t(lang: Lang, key: TextKey) -> &'static str {
    let strings = strings(lang);
    match key {
        TextKey::HeroTitle => strings.hero_title,
        TextKey::HeroSubtitle => strings.hero_subtitle,
        TextKey::FeatureEmail => strings.feature_email,
        TextKey::FeatureSpeed => strings.feature_speed,
        TextKey::FeatureSecurity => strings.feature_security,
        TextKey::FormTitle => strings.form_title,
        TextKey::FormSubtitle => strings.form_subtitle,
        TextKey::EmailLabel => strings.email_label,
        TextKey::EmailPlaceholder => strings.email_placeholder,
        TextKey::SubmitButton => strings.submit_button,
        TextKey::ResetSuccess => strings.reset_success,
        TextKey::ResetError => strings.reset_error,
        TextKey::BackText => strings.back_text,
        TextKey::BackLink => strings.back_link,
        TextKey::SignInTitle => strings.sign_in_title,
        TextKey::SignInSubtitle => strings.sign_in_subtitle,
        TextKey::ForgotLink => strings.forgot_link,
    }
}

fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::En => &EN,
        Lang::Es => &ES,
        Lang::Fr => &FR,
        Lang::De => &DE,
        Lang::Pt => &PT,
        Lang::Ru => &RU,
        Lang::Tr => &TR,
        Lang::It => &IT,
        Lang::Ar => &AR,
        Lang::Zh => &ZH,
        Lang::Ja => &JA,
        Lang::Ko => &KO,
        Lang::Ig => &IG,
        Lang::Ha => &HA,
        Lang::Yo => &YO,
        Lang::Hi => &HI,
        Lang::Bn => &BN,
        Lang::Pcm => &PCM,
    }
}

const EN: Strings = Strings {
    hero_title: "Secure Password Recovery",
    hero_subtitle: "We'll help you get back into your account safely and quickly.",
    feature_email: "Reset link sent straight to your inbox",
    feature_speed: "Back in your account within minutes",
    feature_security: "Protected by industry-standard security",
    form_title: "Forgot Password?",
    form_subtitle: "Enter your email address and we'll send you a link to reset your password.",
    email_label: "Email",
    email_placeholder: "Enter your email address",
    submit_button: "Send Reset Link",
    reset_success: "Password reset link sent! Check your email.",
    reset_error: "Something went wrong. Please try again.",
    back_text: "Remember your password?",
    back_link: "Sign in",
    sign_in_title: "Sign In",
    sign_in_subtitle: "Welcome back to LearnVastora.",
    forgot_link: "Forgot password?",
};

const ES: Strings = Strings {
    hero_title: "Recuperación segura de contraseña",
    hero_subtitle: "Te ayudamos a volver a tu cuenta de forma rápida y segura.",
    feature_email: "Enlace de restablecimiento directo a tu correo",
    feature_speed: "Vuelve a tu cuenta en minutos",
    feature_security: "Protegido con seguridad de nivel profesional",
    form_title: "¿Olvidaste tu contraseña?",
    form_subtitle: "Introduce tu correo electrónico y te enviaremos un enlace para restablecer tu contraseña.",
    email_label: "Correo electrónico",
    email_placeholder: "Introduce tu correo electrónico",
    submit_button: "Enviar enlace",
    reset_success: "¡Enlace enviado! Revisa tu correo.",
    reset_error: "Algo salió mal. Inténtalo de nuevo.",
    back_text: "¿Recuerdas tu contraseña?",
    back_link: "Iniciar sesión",
    sign_in_title: "Iniciar sesión",
    sign_in_subtitle: "Bienvenido de nuevo a LearnVastora.",
    forgot_link: "¿Olvidaste tu contraseña?",
};

const FR: Strings = Strings {
    hero_title: "Récupération sécurisée du mot de passe",
    hero_subtitle: "Nous vous aidons à retrouver votre compte rapidement et en toute sécurité.",
    feature_email: "Lien de réinitialisation envoyé dans votre boîte mail",
    feature_speed: "Retrouvez votre compte en quelques minutes",
    feature_security: "Protégé par une sécurité de niveau professionnel",
    form_title: "Mot de passe oublié ?",
    form_subtitle: "Saisissez votre adresse e-mail et nous vous enverrons un lien pour réinitialiser votre mot de passe.",
    email_label: "E-mail",
    email_placeholder: "Saisissez votre adresse e-mail",
    submit_button: "Envoyer le lien",
    reset_success: "Lien envoyé ! Consultez votre boîte mail.",
    reset_error: "Une erreur est survenue. Veuillez réessayer.",
    back_text: "Vous vous souvenez de votre mot de passe ?",
    back_link: "Se connecter",
    sign_in_title: "Connexion",
    sign_in_subtitle: "Bon retour sur LearnVastora.",
    forgot_link: "Mot de passe oublié ?",
};

const DE: Strings = Strings {
    hero_title: "Sichere Passwort-Wiederherstellung",
    hero_subtitle: "Wir helfen dir, schnell und sicher zurück in dein Konto zu kommen.",
    feature_email: "Reset-Link direkt in dein Postfach",
    feature_speed: "In wenigen Minuten zurück im Konto",
    feature_security: "Geschützt durch bewährte Sicherheitsstandards",
    form_title: "Passwort vergessen?",
    form_subtitle: "Gib deine E-Mail-Adresse ein und wir senden dir einen Link zum Zurücksetzen deines Passworts.",
    email_label: "E-Mail",
    email_placeholder: "E-Mail-Adresse eingeben",
    submit_button: "Link senden",
    reset_success: "Link verschickt! Prüfe dein Postfach.",
    reset_error: "Etwas ist schiefgelaufen. Bitte versuche es erneut.",
    back_text: "Passwort wieder eingefallen?",
    back_link: "Anmelden",
    sign_in_title: "Anmelden",
    sign_in_subtitle: "Willkommen zurück bei LearnVastora.",
    forgot_link: "Passwort vergessen?",
};

const PT: Strings = Strings {
    hero_title: "Recuperação segura de senha",
    hero_subtitle: "Vamos ajudar você a voltar à sua conta com rapidez e segurança.",
    feature_email: "Link de redefinição direto no seu e-mail",
    feature_speed: "De volta à sua conta em minutos",
    feature_security: "Protegido por segurança de nível profissional",
    form_title: "Esqueceu a senha?",
    form_subtitle: "Digite seu e-mail e enviaremos um link para redefinir sua senha.",
    email_label: "E-mail",
    email_placeholder: "Digite seu e-mail",
    submit_button: "Enviar link",
    reset_success: "Link enviado! Verifique seu e-mail.",
    reset_error: "Algo deu errado. Tente novamente.",
    back_text: "Lembrou da senha?",
    back_link: "Entrar",
    sign_in_title: "Entrar",
    sign_in_subtitle: "Bem-vindo de volta ao LearnVastora.",
    forgot_link: "Esqueceu a senha?",
};

const RU: Strings = Strings {
    hero_title: "Безопасное восстановление пароля",
    hero_subtitle: "Мы поможем вам быстро и безопасно вернуться в аккаунт.",
    feature_email: "Ссылка для сброса придёт на вашу почту",
    feature_speed: "Доступ к аккаунту за несколько минут",
    feature_security: "Под защитой современных стандартов безопасности",
    form_title: "Забыли пароль?",
    form_subtitle: "Введите адрес электронной почты, и мы отправим ссылку для сброса пароля.",
    email_label: "Эл. почта",
    email_placeholder: "Введите адрес электронной почты",
    submit_button: "Отправить ссылку",
    reset_success: "Ссылка отправлена! Проверьте почту.",
    reset_error: "Что-то пошло не так. Попробуйте ещё раз.",
    back_text: "Вспомнили пароль?",
    back_link: "Войти",
    sign_in_title: "Вход",
    sign_in_subtitle: "С возвращением в LearnVastora.",
    forgot_link: "Забыли пароль?",
};

const TR: Strings = Strings {
    hero_title: "Güvenli parola kurtarma",
    hero_subtitle: "Hesabınıza hızlı ve güvenli şekilde dönmenize yardımcı oluyoruz.",
    feature_email: "Sıfırlama bağlantısı doğrudan e-postanıza",
    feature_speed: "Dakikalar içinde hesabınıza dönün",
    feature_security: "Endüstri standardı güvenlikle korunur",
    form_title: "Parolanızı mı unuttunuz?",
    form_subtitle: "E-posta adresinizi girin, parolanızı sıfırlamanız için bir bağlantı gönderelim.",
    email_label: "E-posta",
    email_placeholder: "E-posta adresinizi girin",
    submit_button: "Bağlantı gönder",
    reset_success: "Bağlantı gönderildi! E-postanızı kontrol edin.",
    reset_error: "Bir şeyler ters gitti. Lütfen tekrar deneyin.",
    back_text: "Parolanızı hatırladınız mı?",
    back_link: "Giriş yap",
    sign_in_title: "Giriş",
    sign_in_subtitle: "LearnVastora'ya tekrar hoş geldiniz.",
    forgot_link: "Parolanızı mı unuttunuz?",
};

const IT: Strings = Strings {
    hero_title: "Recupero sicuro della password",
    hero_subtitle: "Ti aiutiamo a rientrare nel tuo account in modo rapido e sicuro.",
    feature_email: "Link di reimpostazione diretto nella tua casella",
    feature_speed: "Di nuovo nel tuo account in pochi minuti",
    feature_security: "Protetto da sicurezza di livello professionale",
    form_title: "Password dimenticata?",
    form_subtitle: "Inserisci il tuo indirizzo e-mail e ti invieremo un link per reimpostare la password.",
    email_label: "E-mail",
    email_placeholder: "Inserisci il tuo indirizzo e-mail",
    submit_button: "Invia link",
    reset_success: "Link inviato! Controlla la tua e-mail.",
    reset_error: "Qualcosa è andato storto. Riprova.",
    back_text: "Ricordi la password?",
    back_link: "Accedi",
    sign_in_title: "Accedi",
    sign_in_subtitle: "Bentornato su LearnVastora.",
    forgot_link: "Password dimenticata?",
};

const AR: Strings = Strings {
    hero_title: "استعادة آمنة لكلمة المرور",
    hero_subtitle: "سنساعدك على العودة إلى حسابك بسرعة وأمان.",
    feature_email: "رابط إعادة التعيين يصل إلى بريدك مباشرة",
    feature_speed: "عُد إلى حسابك خلال دقائق",
    feature_security: "محمي بمعايير أمان احترافية",
    form_title: "هل نسيت كلمة المرور؟",
    form_subtitle: "أدخل بريدك الإلكتروني وسنرسل لك رابطًا لإعادة تعيين كلمة المرور.",
    email_label: "البريد الإلكتروني",
    email_placeholder: "أدخل بريدك الإلكتروني",
    submit_button: "إرسال الرابط",
    reset_success: "تم إرسال الرابط! تحقق من بريدك.",
    reset_error: "حدث خطأ ما. حاول مرة أخرى.",
    back_text: "هل تذكرت كلمة المرور؟",
    back_link: "تسجيل الدخول",
    sign_in_title: "تسجيل الدخول",
    sign_in_subtitle: "مرحبًا بعودتك إلى LearnVastora.",
    forgot_link: "هل نسيت كلمة المرور؟",
};

const ZH: Strings = Strings {
    hero_title: "安全找回密码",
    hero_subtitle: "我们将帮助您快速、安全地找回账户。",
    feature_email: "重置链接直接发送到您的邮箱",
    feature_speed: "几分钟内即可恢复账户",
    feature_security: "采用行业标准安全防护",
    form_title: "忘记密码？",
    form_subtitle: "输入您的电子邮箱，我们将发送重置密码的链接。",
    email_label: "电子邮箱",
    email_placeholder: "请输入电子邮箱",
    submit_button: "发送重置链接",
    reset_success: "重置链接已发送！请查收邮件。",
    reset_error: "出了点问题，请重试。",
    back_text: "想起密码了？",
    back_link: "登录",
    sign_in_title: "登录",
    sign_in_subtitle: "欢迎回到 LearnVastora。",
    forgot_link: "忘记密码？",
};

const JA: Strings = Strings {
    hero_title: "安全なパスワード再設定",
    hero_subtitle: "すばやく安全にアカウントへ戻れるようお手伝いします。",
    feature_email: "再設定リンクをメールでお届け",
    feature_speed: "数分でアカウントに復帰",
    feature_security: "業界標準のセキュリティで保護",
    form_title: "パスワードをお忘れですか？",
    form_subtitle: "メールアドレスを入力すると、パスワード再設定用のリンクをお送りします。",
    email_label: "メールアドレス",
    email_placeholder: "メールアドレスを入力",
    submit_button: "再設定リンクを送信",
    reset_success: "リンクを送信しました。メールをご確認ください。",
    reset_error: "問題が発生しました。もう一度お試しください。",
    back_text: "パスワードを思い出しましたか？",
    back_link: "ログイン",
    sign_in_title: "ログイン",
    sign_in_subtitle: "LearnVastora へおかえりなさい。",
    forgot_link: "パスワードをお忘れですか？",
};

const KO: Strings = Strings {
    hero_title: "안전한 비밀번호 찾기",
    hero_subtitle: "빠르고 안전하게 계정으로 돌아갈 수 있도록 도와드립니다.",
    feature_email: "재설정 링크를 메일로 바로 전송",
    feature_speed: "몇 분 안에 계정 복구",
    feature_security: "업계 표준 보안으로 보호",
    form_title: "비밀번호를 잊으셨나요?",
    form_subtitle: "이메일 주소를 입력하시면 비밀번호 재설정 링크를 보내드립니다.",
    email_label: "이메일",
    email_placeholder: "이메일 주소 입력",
    submit_button: "재설정 링크 보내기",
    reset_success: "링크를 보냈습니다! 메일함을 확인하세요.",
    reset_error: "문제가 발생했습니다. 다시 시도해 주세요.",
    back_text: "비밀번호가 기억나셨나요?",
    back_link: "로그인",
    sign_in_title: "로그인",
    sign_in_subtitle: "LearnVastora에 다시 오신 것을 환영합니다.",
    forgot_link: "비밀번호를 잊으셨나요?",
};

const IG: Strings = Strings {
    hero_title: "Nwetaghachi okwuntughe n'enweghị nsogbu",
    hero_subtitle: "Anyị ga-enyere gị aka ịbanyeghachi na akaụntụ gị ngwa ngwa.",
    feature_email: "A ga-eziga njikọ ntọgharị na email gị",
    feature_speed: "Banyeghachi na akaụntụ gị n'ime nkeji ole na ole",
    feature_security: "Echekwabara ya nke ọma",
    form_title: "Chefuru okwuntughe?",
    form_subtitle: "Tinye adreesị email gị, anyị ga-eziga gị njikọ iji tọgharịa okwuntughe gị.",
    email_label: "Email",
    email_placeholder: "Tinye adreesị email gị",
    submit_button: "Ziga njikọ",
    reset_success: "Ezigala njikọ! Lelee email gị.",
    reset_error: "Ihe adịghị mma mere. Biko nwaa ọzọ.",
    back_text: "Chetara okwuntughe gị?",
    back_link: "Banye",
    sign_in_title: "Banye",
    sign_in_subtitle: "Nnọọ ọzọ na LearnVastora.",
    forgot_link: "Chefuru okwuntughe?",
};

const HA: Strings = Strings {
    hero_title: "Dawo da kalmar sirri cikin aminci",
    hero_subtitle: "Za mu taimaka maka ka koma cikin asusunka cikin sauri da aminci.",
    feature_email: "Za a aika hanyar sake saiti zuwa imel dinka",
    feature_speed: "Komawa cikin asusunka cikin 'yan mintoci",
    feature_security: "An kiyaye shi da tsaro mai inganci",
    form_title: "Ka manta kalmar sirri?",
    form_subtitle: "Shigar da adireshin imel dinka, za mu aiko maka hanyar sake saita kalmar sirri.",
    email_label: "Imel",
    email_placeholder: "Shigar da adireshin imel",
    submit_button: "Aika hanyar sake saiti",
    reset_success: "An aika! Duba imel dinka.",
    reset_error: "Wani abu ya faru. Da fatan za a sake gwadawa.",
    back_text: "Ka tuna kalmar sirri?",
    back_link: "Shiga",
    sign_in_title: "Shiga",
    sign_in_subtitle: "Barka da dawowa LearnVastora.",
    forgot_link: "Ka manta kalmar sirri?",
};

const YO: Strings = Strings {
    hero_title: "Ìmúpadà ọ̀rọ̀ aṣínà láìséwu",
    hero_subtitle: "A ó ràn ọ́ lọ́wọ́ láti padà sínú àkáǹtì rẹ kíákíá.",
    feature_email: "A ó fi ìjápọ̀ àtúnto ránṣẹ́ sí ímeèlì rẹ",
    feature_speed: "Padà sínú àkáǹtì rẹ láàrin ìṣẹ́jú díẹ̀",
    feature_security: "A dáàbò bò ó pẹ̀lú ààbò tó péye",
    form_title: "Gbàgbé ọ̀rọ̀ aṣínà?",
    form_subtitle: "Tẹ àdírẹ́sì ímeèlì rẹ, a ó sì fi ìjápọ̀ ránṣẹ́ láti tún ọ̀rọ̀ aṣínà rẹ ṣe.",
    email_label: "Ímeèlì",
    email_placeholder: "Tẹ àdírẹ́sì ímeèlì rẹ",
    submit_button: "Fi ìjápọ̀ ránṣẹ́",
    reset_success: "A ti fi ìjápọ̀ ránṣẹ́! Ṣàyẹ̀wò ímeèlì rẹ.",
    reset_error: "Nǹkan kan ṣẹlẹ̀. Jọ̀wọ́ gbìyànjú lẹ́ẹ̀kan si.",
    back_text: "Rántí ọ̀rọ̀ aṣínà rẹ?",
    back_link: "Wọlé",
    sign_in_title: "Wọlé",
    sign_in_subtitle: "Káàbọ̀ padà sí LearnVastora.",
    forgot_link: "Gbàgbé ọ̀rọ̀ aṣínà?",
};

const HI: Strings = Strings {
    hero_title: "सुरक्षित पासवर्ड रिकवरी",
    hero_subtitle: "हम आपको जल्दी और सुरक्षित रूप से आपके खाते में वापस पहुँचाएँगे।",
    feature_email: "रीसेट लिंक सीधे आपके ईमेल पर",
    feature_speed: "कुछ ही मिनटों में खाते में वापसी",
    feature_security: "उद्योग-मानक सुरक्षा से सुरक्षित",
    form_title: "पासवर्ड भूल गए?",
    form_subtitle: "अपना ईमेल पता दर्ज करें और हम आपको पासवर्ड रीसेट करने का लिंक भेजेंगे।",
    email_label: "ईमेल",
    email_placeholder: "अपना ईमेल पता दर्ज करें",
    submit_button: "रीसेट लिंक भेजें",
    reset_success: "लिंक भेज दिया गया! अपना ईमेल देखें।",
    reset_error: "कुछ गड़बड़ हो गई। कृपया फिर से कोशिश करें।",
    back_text: "पासवर्ड याद आ गया?",
    back_link: "साइन इन करें",
    sign_in_title: "साइन इन",
    sign_in_subtitle: "LearnVastora में आपका फिर से स्वागत है।",
    forgot_link: "पासवर्ड भूल गए?",
};

const BN: Strings = Strings {
    hero_title: "নিরাপদ পাসওয়ার্ড পুনরুদ্ধার",
    hero_subtitle: "আমরা আপনাকে দ্রুত ও নিরাপদে আপনার অ্যাকাউন্টে ফিরতে সাহায্য করব।",
    feature_email: "রিসেট লিঙ্ক সরাসরি আপনার ইমেলে",
    feature_speed: "কয়েক মিনিটেই অ্যাকাউন্টে ফিরুন",
    feature_security: "শিল্পমানের নিরাপত্তায় সুরক্ষিত",
    form_title: "পাসওয়ার্ড ভুলে গেছেন?",
    form_subtitle: "আপনার ইমেল ঠিকানা দিন, আমরা পাসওয়ার্ড রিসেট করার লিঙ্ক পাঠাব।",
    email_label: "ইমেল",
    email_placeholder: "আপনার ইমেল ঠিকানা দিন",
    submit_button: "রিসেট লিঙ্ক পাঠান",
    reset_success: "লিঙ্ক পাঠানো হয়েছে! আপনার ইমেল দেখুন।",
    reset_error: "কিছু ভুল হয়েছে। আবার চেষ্টা করুন।",
    back_text: "পাসওয়ার্ড মনে পড়েছে?",
    back_link: "সাইন ইন",
    sign_in_title: "সাইন ইন",
    sign_in_subtitle: "LearnVastora-এ আবার স্বাগতম।",
    forgot_link: "পাসওয়ার্ড ভুলে গেছেন?",
};

const PCM: Strings = Strings {
    hero_title: "Recover your password well well",
    hero_subtitle: "We go help you enter your account back sharp sharp, no wahala.",
    feature_email: "Reset link go land straight for your email",
    feature_speed: "You go dey back inside your account for small minutes",
    feature_security: "E dey protected with correct security",
    form_title: "You forget password?",
    form_subtitle: "Put your email address, we go send you link wey you go take reset your password.",
    email_label: "Email",
    email_placeholder: "Put your email address",
    submit_button: "Send reset link",
    reset_success: "We don send the link! Check your email.",
    reset_error: "Something spoil. Abeg try again.",
    back_text: "You remember your password?",
    back_link: "Sign in",
    sign_in_title: "Sign in",
    sign_in_subtitle: "Welcome back to LearnVastora.",
    forgot_link: "You forget password?",
};

/// Provides the shared language signal and adopts the persisted choice
/// once the page is up. Absent or unknown stored codes leave the default
/// in place.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(Lang::default);
    use_context_provider(|| lang);

    use_effect(move || {
        spawn(async move {
            if let Some(code) = storage::load(storage::LANGUAGE_KEY).await {
                lang.set(lang_or_default(&code));
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Access the shared language signal provided by [`I18nProvider`].
pub fn use_lang() -> Signal<Lang> {
    use_context::<Signal<Lang>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_KEYS: &[TextKey] = &[
        TextKey::HeroTitle,
        TextKey::HeroSubtitle,
        TextKey::FeatureEmail,
        TextKey::FeatureSpeed,
        TextKey::FeatureSecurity,
        TextKey::FormTitle,
        TextKey::FormSubtitle,
        TextKey::EmailLabel,
        TextKey::EmailPlaceholder,
        TextKey::SubmitButton,
        TextKey::ResetSuccess,
        TextKey::ResetError,
        TextKey::BackText,
        TextKey::BackLink,
        TextKey::SignInTitle,
        TextKey::SignInSubtitle,
        TextKey::ForgotLink,
    ];

    #[test]
    fn default_language_is_english() {
        assert_eq!(Lang::default(), Lang::En);
    }

    #[test]
    fn all_langs_list_is_complete() {
        assert_eq!(ALL_LANGS.len(), 18);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = ALL_LANGS.iter().map(|l| l.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL_LANGS.len());
    }

    #[test]
    fn code_roundtrip() {
        for lang in ALL_LANGS {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn from_code_tolerates_region_subtags() {
        assert_eq!(Lang::from_code("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_code("pt_BR"), Some(Lang::Pt));
        assert_eq!(Lang::from_code("FR"), Some(Lang::Fr));
    }

    #[test]
    fn from_code_unknown_returns_none() {
        assert_eq!(Lang::from_code("tlh"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn unknown_code_falls_back_to_default_glyph() {
        assert_eq!(lang_or_default("tlh"), Lang::En);
        assert_eq!(lang_or_default("tlh").flag(), "🇺🇸");
        assert_eq!(lang_or_default(""), Lang::En);
    }

    #[test]
    fn every_language_has_every_string() {
        for lang in ALL_LANGS {
            for key in ALL_KEYS {
                assert!(
                    !t(*lang, *key).is_empty(),
                    "missing {key:?} for {lang:?}"
                );
            }
        }
    }

    #[test]
    fn translations_differ_across_languages() {
        assert_ne!(
            t(Lang::En, TextKey::SubmitButton),
            t(Lang::Fr, TextKey::SubmitButton)
        );
        assert_ne!(
            t(Lang::En, TextKey::FormTitle),
            t(Lang::Ja, TextKey::FormTitle)
        );
    }

    #[test]
    fn nigerian_languages_share_a_flag() {
        assert_eq!(Lang::Ig.flag(), Lang::Ha.flag());
        assert_eq!(Lang::Yo.flag(), Lang::Pcm.flag());
    }
}
